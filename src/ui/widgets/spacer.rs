use crate::{
    graphics,
    view::{
        id::{ViewId, ViewIdMaker},
        GeneralEvent, SizeConstraints, TargetedEvent, View, ViewWithoutLayout,
    },
};

// empty space with a requested size, used to separate other widgets
pub(crate) struct Spacer {
    id: ViewId,
    size: (f32, f32),
}
pub(crate) struct SpacerLayout<'spacer> {
    spacer: &'spacer Spacer,
    actual_size: graphics::Vector2f,
}

impl Spacer {
    #[cfg(test)]
    pub(crate) fn id(&self) -> ViewId {
        self.id
    }
}

impl<Data> ViewWithoutLayout<Data> for Spacer {
    type WithLayout<'without_layout> = SpacerLayout<'without_layout>;

    fn layout(&self, sc: SizeConstraints) -> Self::WithLayout<'_> {
        SpacerLayout { spacer: self, actual_size: sc.clamp_size(graphics::Vector2f::from(self.size)) }
    }
}
impl<Data> View<Data> for SpacerLayout<'_> {
    fn draw_inner(&self, _: &crate::App, _: &mut dyn graphics::RenderTarget, _: graphics::Vector2f, _: Option<ViewId>) {}

    fn find_hover(&self, top_left: graphics::Vector2f, mouse: graphics::Vector2f) -> Option<ViewId> {
        if graphics::FloatRect::from_vecs(top_left, self.actual_size).contains(mouse) {
            Some(self.spacer.id)
        } else {
            None
        }
    }
    fn size(&self) -> graphics::Vector2f {
        self.actual_size
    }

    fn send_targeted_event(&self, _: &crate::App, _: &mut Data, _: ViewId, _: TargetedEvent) {}
    fn targeted_event(&self, _: &crate::App, _: &mut Data, _: TargetedEvent) {}
    fn general_event(&self, _: &crate::App, _: &mut Data, _: GeneralEvent) {}
}

pub(crate) fn spacer(id_maker: &mut ViewIdMaker, size: (f32, f32)) -> Spacer {
    Spacer { id: id_maker.next_id(), size }
}
