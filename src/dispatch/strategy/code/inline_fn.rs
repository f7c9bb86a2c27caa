//! Strategy as a hand-rolled, fixed-capacity type-erased callable.
//!
//! [`InlineFn`] stores the callable inside the shape itself, in an `N`-byte
//! aligned buffer, next to three erased function pointers (call, clone,
//! drop). There is no heap allocation for the strategy and cloning copies
//! the stored callable, giving value semantics like a plain function pointer.

use crate::dispatch::ShapeCollection;
use crate::geometry::{Circle, ShapeKind, ShapeRecipe, Square, Vector3D};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr;

/// Alignment guaranteed for the stored callable.
pub const INLINE_ALIGN: usize = 16;

#[repr(C, align(16))]
struct Buffer<const N: usize>([MaybeUninit<u8>; N]);

impl<const N: usize> Buffer<N> {
    fn uninit() -> Self {
        Self([MaybeUninit::uninit(); N])
    }

    fn as_ptr(&self) -> *const u8 {
        self.0.as_ptr().cast()
    }

    fn as_mut_ptr(&mut self) -> *mut u8 {
        self.0.as_mut_ptr().cast()
    }
}

/// Type-erased `Fn(&mut T, &Vector3D)` stored inline in `N` bytes.
pub struct InlineFn<T, const N: usize> {
    buffer: Buffer<N>,
    call: unsafe fn(*const u8, &mut T, &Vector3D),
    clone: unsafe fn(*const u8, *mut u8),
    drop: unsafe fn(*mut u8),
    // The stored callable may be neither Send nor Sync.
    _not_send: PhantomData<*const ()>,
}

impl<T, const N: usize> InlineFn<T, N> {
    /// Store `f` inline.
    ///
    /// Callables larger than `N` bytes or aligned above [`INLINE_ALIGN`] are
    /// rejected at compile time.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut T, &Vector3D) + Clone + 'static,
    {
        const {
            assert!(mem::size_of::<F>() <= N, "callable does not fit the inline buffer");
            assert!(mem::align_of::<F>() <= INLINE_ALIGN, "callable is over-aligned");
        }

        let mut buffer = Buffer::uninit();
        // SAFETY: the buffer is large and aligned enough for F (checked above)
        // and currently holds no value.
        unsafe { ptr::write(buffer.as_mut_ptr().cast::<F>(), f) };

        Self {
            buffer,
            call: call_erased::<T, F>,
            clone: clone_erased::<F>,
            drop: drop_erased::<F>,
            _not_send: PhantomData,
        }
    }

    #[inline(always)]
    pub fn call(&self, target: &mut T, v: &Vector3D) {
        // SAFETY: `call` was instantiated for the type stored in `buffer`.
        unsafe { (self.call)(self.buffer.as_ptr(), target, v) }
    }
}

impl<T, const N: usize> Clone for InlineFn<T, N> {
    fn clone(&self) -> Self {
        let mut buffer = Buffer::uninit();
        // SAFETY: `clone` matches the stored type; the fresh buffer has the
        // same size and alignment as ours.
        unsafe { (self.clone)(self.buffer.as_ptr(), buffer.as_mut_ptr()) };

        Self {
            buffer,
            call: self.call,
            clone: self.clone,
            drop: self.drop,
            _not_send: PhantomData,
        }
    }
}

impl<T, const N: usize> Drop for InlineFn<T, N> {
    fn drop(&mut self) {
        // SAFETY: the buffer holds a live value of the type `drop` was
        // instantiated for, and it is never touched again.
        unsafe { (self.drop)(self.buffer.as_mut_ptr()) }
    }
}

unsafe fn call_erased<T, F>(data: *const u8, target: &mut T, v: &Vector3D)
where
    F: Fn(&mut T, &Vector3D),
{
    (*data.cast::<F>())(target, v)
}

unsafe fn clone_erased<F: Clone>(src: *const u8, dst: *mut u8) {
    ptr::write(dst.cast::<F>(), (*src.cast::<F>()).clone());
}

unsafe fn drop_erased<F>(data: *mut u8) {
    ptr::drop_in_place(data.cast::<F>());
}

/// Inline capacity used by the shapes, enough for a captured pointer.
pub const STRATEGY_CAPACITY: usize = 16;

pub type CircleStrategy = InlineFn<Circle, STRATEGY_CAPACITY>;
pub type SquareStrategy = InlineFn<Square, STRATEGY_CAPACITY>;

pub fn translate_circle(circle: &mut Circle, v: &Vector3D) {
    circle.center = circle.center + *v;
}

pub fn translate_square(square: &mut Square, v: &Vector3D) {
    square.center = square.center + *v;
}

pub trait Shape {
    fn translate(&mut self, v: &Vector3D);
    fn center(&self) -> Vector3D;
}

pub struct CircleShape {
    circle: Circle,
    strategy: CircleStrategy,
}

impl CircleShape {
    pub fn new(circle: Circle, strategy: CircleStrategy) -> Self {
        Self { circle, strategy }
    }
}

impl Shape for CircleShape {
    fn translate(&mut self, v: &Vector3D) {
        self.strategy.call(&mut self.circle, v);
    }

    fn center(&self) -> Vector3D {
        self.circle.center
    }
}

pub struct SquareShape {
    square: Square,
    strategy: SquareStrategy,
}

impl SquareShape {
    pub fn new(square: Square, strategy: SquareStrategy) -> Self {
        Self { square, strategy }
    }
}

impl Shape for SquareShape {
    fn translate(&mut self, v: &Vector3D) {
        self.strategy.call(&mut self.square, v);
    }

    fn center(&self) -> Vector3D {
        self.square.center
    }
}

pub struct Shapes(Vec<Box<dyn Shape>>);

#[inline(never)]
pub fn translate(shapes: &mut Shapes, v: &Vector3D) {
    for s in shapes.0.iter_mut() {
        s.translate(v);
    }
}

pub fn build(recipes: &[ShapeRecipe]) -> Box<dyn ShapeCollection> {
    // One prototype per kind, copied into every shape.
    let circle_strategy = CircleStrategy::new(translate_circle);
    let square_strategy = SquareStrategy::new(translate_square);

    let shapes = recipes
        .iter()
        .map(|r| -> Box<dyn Shape> {
            match r.kind {
                ShapeKind::Circle => {
                    Box::new(CircleShape::new(r.to_circle(), circle_strategy.clone()))
                }
                ShapeKind::Square => {
                    Box::new(SquareShape::new(r.to_square(), square_strategy.clone()))
                }
            }
        })
        .collect();
    Box::new(Shapes(shapes))
}

impl ShapeCollection for Shapes {
    fn translate(&mut self, offset: &Vector3D) {
        translate(self, offset)
    }

    fn centers(&self) -> Vec<Vector3D> {
        self.0.iter().map(|s| s.center()).collect()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_call_forwards_arguments() {
        let f: InlineFn<Circle, 16> = InlineFn::new(translate_circle);
        let mut circle = Circle::default();
        f.call(&mut circle, &Vector3D::new(1.0, 2.0, 3.0));
        assert_eq!(circle.center, Vector3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_captured_state_is_used() {
        let scale = 2.0;
        let f: InlineFn<Square, 16> = InlineFn::new(move |s: &mut Square, v: &Vector3D| {
            s.center = s.center + Vector3D::new(v.x * scale, v.y * scale, v.z * scale);
        });
        let mut square = Square::default();
        f.call(&mut square, &Vector3D::new(1.0, 1.0, 0.0));
        assert_eq!(square.center, Vector3D::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_clone_and_drop_accounting() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let f: InlineFn<Circle, 16> = InlineFn::new(move |_: &mut Circle, _: &Vector3D| {
            counter.set(counter.get() + 1);
        });
        assert_eq!(Rc::strong_count(&calls), 2);

        let g = f.clone();
        assert_eq!(Rc::strong_count(&calls), 3);

        let mut circle = Circle::default();
        f.call(&mut circle, &Vector3D::ZERO);
        g.call(&mut circle, &Vector3D::ZERO);
        assert_eq!(calls.get(), 2);

        drop(f);
        assert_eq!(Rc::strong_count(&calls), 2);
        drop(g);
        assert_eq!(Rc::strong_count(&calls), 1);
    }

    #[test]
    fn test_moved_inline_fn_still_callable() {
        let f: InlineFn<Circle, 16> = InlineFn::new(translate_circle);
        let boxed = Box::new(f);
        let mut circle = Circle::default();
        boxed.call(&mut circle, &Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(circle.center.z, 1.0);
    }
}
