#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct ViewId(u64);

// ids are only stable as long as the view tree is built in the same order every time
#[derive(Default)]
pub(crate) struct ViewIdMaker {
    next: u64,
}
impl ViewIdMaker {
    pub(crate) fn new() -> ViewIdMaker {
        ViewIdMaker::default()
    }
    pub(crate) fn next_id(&mut self) -> ViewId {
        let id = ViewId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod test {
    use super::ViewIdMaker;

    #[test]
    fn same_order_same_ids() {
        let mut first = ViewIdMaker::new();
        let mut second = ViewIdMaker::new();
        let first_ids: Vec<_> = (0..3).map(|_| first.next_id()).collect();
        let second_ids: Vec<_> = (0..3).map(|_| second.next_id()).collect();
        assert_eq!(first_ids, second_ids);
        assert_ne!(first_ids[0], first_ids[1]);
    }
}
