use std::rc::Rc;

use font_kit::{family_name::FamilyName, handle::Handle, properties::Properties, source::SystemSource};

use crate::graphics::{Font, SfBox};

#[derive(Debug, thiserror::Error)]
pub(crate) enum FontError {
    #[error("could not find a sans-serif system font: {0}")]
    NotFound(#[from] font_kit::error::SelectionError),
    #[error("font path {0:?} is not valid unicode")]
    NonUnicodePath(std::path::PathBuf),
    #[error("the best matching system font is only available in memory")]
    InMemoryFont,
    #[error("could not load font from {0}")]
    Load(String),
}

pub(crate) fn load_system_font() -> Result<Rc<SfBox<Font>>, FontError> {
    let handle = SystemSource::new().select_best_match(&[FamilyName::SansSerif], &Properties::new())?;
    let path = font_path(&handle)?;

    tracing::info!(path, "loading font");
    let font = Font::from_file(path).ok_or_else(|| FontError::Load(path.to_string()))?;
    Ok(Rc::new(font))
}

// sfml can only load fonts from files without keeping the font data alive ourselves
fn font_path(handle: &Handle) -> Result<&str, FontError> {
    match handle {
        Handle::Path { path, font_index: _ } => path.to_str().ok_or_else(|| FontError::NonUnicodePath(path.clone())),
        Handle::Memory { .. } => Err(FontError::InMemoryFont),
    }
}

#[cfg(test)]
mod test {
    use std::{path::PathBuf, sync::Arc};

    use font_kit::handle::Handle;

    use super::{font_path, FontError};

    #[test]
    fn path_handle_gives_path() {
        let handle = Handle::Path { path: PathBuf::from("/usr/share/fonts/DejaVuSans.ttf"), font_index: 0 };
        assert_eq!(font_path(&handle).ok(), Some("/usr/share/fonts/DejaVuSans.ttf"));
    }

    #[test]
    fn memory_handle_is_rejected() {
        let handle = Handle::Memory { bytes: Arc::new(vec![0, 1, 2]), font_index: 0 };
        assert!(matches!(font_path(&handle), Err(FontError::InMemoryFont)));
    }
}
