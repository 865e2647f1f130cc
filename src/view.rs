pub(crate) mod id;
pub(crate) mod lens;

use sfml::window::{mouse, Event};

use crate::graphics;

#[derive(Copy, Clone, Debug)]
pub(crate) enum TargetedEvent {
    LeftMouseDown(graphics::Vector2f),
}
#[derive(Copy, Clone, Debug)]
pub(crate) enum GeneralEvent {
    MouseMoved(graphics::Vector2f),
    LeftMouseUp(graphics::Vector2f),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) struct SizeConstraints {
    pub(crate) min: graphics::Vector2f,
    pub(crate) max: graphics::Vector2f,
}

impl SizeConstraints {
    pub(crate) fn tight(size: graphics::Vector2f) -> SizeConstraints {
        SizeConstraints { min: size, max: size }
    }

    pub(crate) fn with_no_min(&self) -> SizeConstraints {
        SizeConstraints { min: graphics::Vector2f::new(0.0, 0.0), max: self.max }
    }

    pub(crate) fn clamp_size(&self, size: graphics::Vector2f) -> graphics::Vector2f {
        graphics::Vector2f::new(size.x.clamp(self.min.x, self.max.x.max(self.min.x)), size.y.clamp(self.min.y, self.max.y.max(self.min.y)))
    }
}

// view system heavily inspired by xilem
// a view is built from the data every frame and every event, then laid out, then drawn or sent events
pub(crate) trait ViewWithoutLayout<Data> {
    type WithLayout<'without_layout>: View<Data>
    where
        Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_>;
}

pub(crate) trait View<Data> {
    fn draw(&self, app: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, hover: Option<id::ViewId>) {
        self.draw_inner(app, target, top_left, hover);
    }
    fn draw_inner(&self, app: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, hover: Option<id::ViewId>);
    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<id::ViewId>;
    fn size(&self) -> graphics::Vector2f;

    fn send_targeted_event(&self, app: &crate::App, data: &mut Data, target: id::ViewId, event: TargetedEvent);
    fn targeted_event(&self, app: &crate::App, data: &mut Data, event: TargetedEvent);
    fn general_event(&self, app: &crate::App, data: &mut Data, event: GeneralEvent);
}

pub(crate) fn render<Data>(app: &crate::App, target: &mut dyn graphics::RenderTarget, size: graphics::Vector2u, mouse: graphics::Vector2i, view: &impl ViewWithoutLayout<Data>) {
    let layout = view.layout(SizeConstraints::tight(graphics::to_f32(size)));
    let top_left = graphics::Vector2f::new(0.0, 0.0);
    let hover = layout.find_hover(top_left, graphics::to_f32(mouse));
    layout.draw(app, target, top_left, hover);
}

pub(crate) fn event<Data>(app: &crate::App, data: &mut Data, size: graphics::Vector2u, view: &impl ViewWithoutLayout<Data>, event: Event) {
    let layout = view.layout(SizeConstraints::tight(graphics::to_f32(size)));
    let top_left = graphics::Vector2f::new(0.0, 0.0);
    match event {
        Event::MouseButtonPressed { button: mouse::Button::Left, x, y } => {
            let mouse_pos = graphics::Vector2f::new(x as f32, y as f32);
            if let Some(hovered) = layout.find_hover(top_left, mouse_pos) {
                layout.send_targeted_event(app, data, hovered, TargetedEvent::LeftMouseDown(mouse_pos));
            }
        }

        Event::MouseMoved { x, y } => layout.general_event(app, data, GeneralEvent::MouseMoved(graphics::Vector2f::new(x as f32, y as f32))),

        Event::MouseButtonReleased { button: mouse::Button::Left, x, y } => layout.general_event(app, data, GeneralEvent::LeftMouseUp(graphics::Vector2f::new(x as f32, y as f32))),

        _ => {}
    }
}

#[cfg(test)]
mod test {
    use super::SizeConstraints;
    use crate::graphics::Vector2f;

    #[test]
    fn clamp_size() {
        let sc = SizeConstraints { min: Vector2f::new(10.0, 10.0), max: Vector2f::new(100.0, 50.0) };
        assert_eq!(sc.clamp_size(Vector2f::new(5.0, 70.0)), Vector2f::new(10.0, 50.0));
        assert_eq!(sc.clamp_size(Vector2f::new(40.0, 20.0)), Vector2f::new(40.0, 20.0));
        assert_eq!(sc.with_no_min().clamp_size(Vector2f::new(5.0, 5.0)), Vector2f::new(5.0, 5.0));
    }

    #[test]
    fn max_smaller_than_min_keeps_min() {
        let sc = SizeConstraints { min: Vector2f::new(10.0, 10.0), max: Vector2f::new(0.0, 0.0) };
        assert_eq!(sc.clamp_size(Vector2f::new(50.0, 50.0)), Vector2f::new(10.0, 10.0));
    }

    #[test]
    fn tight() {
        let sc = SizeConstraints::tight(Vector2f::new(700.0, 500.0));
        assert_eq!(sc.clamp_size(Vector2f::new(0.0, 0.0)), Vector2f::new(700.0, 500.0));
    }
}
