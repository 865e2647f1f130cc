use std::marker::PhantomData;

pub(crate) trait Lens<A, B> {
    fn with<R, F: FnOnce(&B) -> R>(&self, a: &A, f: F) -> R;
    fn with_mut<R, F: FnOnce(&mut B) -> R>(&self, a: &mut A, f: F) -> R;
}

pub(crate) struct ClosureLens<A, B, Get: Fn(&A) -> &B, GetMut: Fn(&mut A) -> &mut B> {
    get: Get,
    get_mut: GetMut,

    _phantom: PhantomData<fn(&A) -> &B>,
}

pub(crate) fn from_closures<A, B, Get: Fn(&A) -> &B, GetMut: Fn(&mut A) -> &mut B>(get: Get, get_mut: GetMut) -> ClosureLens<A, B, Get, GetMut> {
    ClosureLens { get, get_mut, _phantom: PhantomData }
}

impl<A, B, Get: Fn(&A) -> &B, GetMut: Fn(&mut A) -> &mut B> Lens<A, B> for ClosureLens<A, B, Get, GetMut> {
    fn with<R, F: FnOnce(&B) -> R>(&self, a: &A, f: F) -> R {
        f((self.get)(a))
    }

    fn with_mut<R, F: FnOnce(&mut B) -> R>(&self, a: &mut A, f: F) -> R {
        f((self.get_mut)(a))
    }
}

#[cfg(test)]
mod test {
    use super::{from_closures, Lens};

    struct Outer {
        inner: (u32, u32),
    }

    #[test]
    fn reads_and_writes_through() {
        let lens = from_closures(|o: &Outer| &o.inner.1, |o: &mut Outer| &mut o.inner.1);
        let mut outer = Outer { inner: (1, 2) };
        assert_eq!(lens.with(&outer, |v| *v), 2);
        lens.with_mut(&mut outer, |v| *v = 5);
        assert_eq!(outer.inner, (1, 5));
    }
}
