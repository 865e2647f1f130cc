use std::{marker::PhantomData, rc::Rc};

use crate::{
    graphics::{self, CenterText, RectCenter, Shape, Transformable},
    theme::Theme,
    view::{
        id::{ViewId, ViewIdMaker},
        lens::Lens,
        GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout,
    },
};

pub(crate) struct ButtonState {
    pressed: bool,
}

impl ButtonState {
    pub(crate) fn new() -> ButtonState {
        ButtonState { pressed: false }
    }

    // disabled buttons never become pressed so they can never fire
    fn press(&mut self, mode: ButtonMode) {
        if mode != ButtonMode::Disabled {
            self.pressed = true;
        }
    }
}

// a selected button is drawn as if it were the chosen option of a group
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum ButtonMode {
    Normal,
    Selected,
    Disabled,
}

pub(crate) struct ButtonView<Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)> {
    id: ViewId,

    text: String,
    font: Rc<graphics::SfBox<graphics::Font>>,

    pressed: bool,
    mode: ButtonMode,

    state_lens: StateLens,
    callback: Callback,

    _phantom: PhantomData<fn(&Data) -> &ButtonState>,
}
pub(crate) struct ButtonLayout<'button, Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)> {
    button: &'button ButtonView<Data, StateLens, Callback>,
    size: graphics::Vector2f,
}

pub(crate) fn button<Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)>(
    id_maker: &mut ViewIdMaker,
    data: &Data,
    text: impl Into<String>,
    mode: ButtonMode,
    state_lens: StateLens,
    callback: Callback,
    font: &Rc<graphics::SfBox<graphics::Font>>,
) -> ButtonView<Data, StateLens, Callback> {
    let pressed = state_lens.with(data, |state| state.pressed);
    ButtonView { id: id_maker.next_id(), text: text.into(), font: font.clone(), pressed, mode, state_lens, callback, _phantom: PhantomData }
}

impl<Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)> ButtonView<Data, StateLens, Callback> {
    fn make_text(&self) -> graphics::Text<'_> {
        let mut text = graphics::Text::new(self.text.as_str(), &self.font, Theme::DEFAULT.button_font_size);
        text.set_style(graphics::TextStyle::BOLD);
        text
    }
}

impl<Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)> ViewWithoutLayout<Data> for ButtonView<Data, StateLens, Callback> {
    type WithLayout<'without_layout> = ButtonLayout<'without_layout, Data, StateLens, Callback> where Self: 'without_layout;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        let bounds = self.make_text().local_bounds();
        let padding = Theme::DEFAULT.widget_padding;
        let size = graphics::Vector2f::new(bounds.left + bounds.width + padding * 2.0, bounds.top + bounds.height + padding * 2.0);
        ButtonLayout { button: self, size: sc.clamp_size(size) }
    }
}

impl<Data, StateLens: Lens<Data, ButtonState>, Callback: Fn(&crate::App, &mut Data)> View<Data> for ButtonLayout<'_, Data, StateLens, Callback> {
    fn draw_inner(&self, _: &crate::App, target: &mut dyn graphics::RenderTarget, top_left: graphics::Vector2f, hover: Option<ViewId>) {
        // inset so that neighboring buttons do not touch
        let inset = Theme::DEFAULT.widget_padding / 4.0;
        let rect = graphics::FloatRect::new(top_left.x + inset, top_left.y + inset, self.size.x - inset * 2.0, self.size.y - inset * 2.0);

        let mut background_rect = graphics::RectangleShape::from_rect(rect);
        let mut text = self.button.make_text();

        text.center();
        text.set_position(rect.center());

        let (bg, fg) = if self.button.mode == ButtonMode::Disabled {
            (Theme::DEFAULT.button_disabled_bg, Theme::DEFAULT.button_disabled_fg)
        } else if self.button.pressed {
            (Theme::DEFAULT.button_pressed_bg, Theme::DEFAULT.button_pressed_fg)
        } else if Some(self.button.id) == hover {
            (Theme::DEFAULT.button_hover_bg, Theme::DEFAULT.button_hover_fg)
        } else if self.button.mode == ButtonMode::Selected {
            (Theme::DEFAULT.button_selected_bg, Theme::DEFAULT.button_normal_fg)
        } else {
            (Theme::DEFAULT.button_normal_bg, Theme::DEFAULT.button_normal_fg)
        };
        background_rect.set_fill_color(bg);
        text.set_fill_color(fg);
        if self.button.mode == ButtonMode::Selected {
            background_rect.set_outline_color(Theme::DEFAULT.button_pressed_bg);
            background_rect.set_outline_thickness(2.0);
        }

        target.draw(&background_rect);
        target.draw(&text);
    }

    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<ViewId> {
        if graphics::FloatRect::from_vecs(top_left, self.size).contains(mouse) {
            Some(self.button.id)
        } else {
            None
        }
    }

    fn size(&self) -> graphics::Vector2f {
        self.size
    }

    fn send_targeted_event(&self, app: &crate::App, data: &mut Data, target: ViewId, event: TargetedEvent) {
        if target == self.button.id {
            self.targeted_event(app, data, event);
        }
    }

    fn targeted_event(&self, _: &crate::App, data: &mut Data, event: TargetedEvent) {
        match event {
            TargetedEvent::LeftMouseDown(_) => self.button.state_lens.with_mut(data, |state| state.press(self.button.mode)),
        }
    }

    fn general_event(&self, app: &crate::App, data: &mut Data, event: GeneralEvent) {
        if self.button.pressed {
            match event {
                GeneralEvent::MouseMoved(_) => {}
                GeneralEvent::LeftMouseUp(_) => {
                    self.button.state_lens.with_mut(data, |state| state.pressed = false);
                    (self.button.callback)(app, data);
                }
            }
        }
    }
}
