//! Positioned shapes and the helpers that move and describe them

use thiserror::Error;

/// Shape operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The shape does not implement the requested operation
    #[error("operation '{operation}' is not supported by {shape}")]
    Unsupported {
        /// Requested operation
        operation: &'static str,
        /// Display name of the shape
        shape: String,
    },
}

/// Something with a mutable position on an integer grid
pub trait Positioned {
    /// Horizontal position
    fn x(&self) -> i32;

    /// Vertical position
    fn y(&self) -> i32;

    /// Set the horizontal position
    fn set_x(&mut self, x: i32);

    /// Set the vertical position
    fn set_y(&mut self, y: i32);

    /// Display name; may be empty
    fn name(&self) -> &str;
}

impl<S: Positioned + ?Sized> Positioned for Box<S> {
    fn x(&self) -> i32 {
        (**self).x()
    }

    fn y(&self) -> i32 {
        (**self).y()
    }

    fn set_x(&mut self, x: i32) {
        (**self).set_x(x)
    }

    fn set_y(&mut self, y: i32) {
        (**self).set_y(y)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "shape"
    } else {
        name
    }
}

/// A bare position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Create a point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Positioned for Point {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    fn name(&self) -> &str {
        ""
    }
}

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl Rectangle {
    /// Create a rectangle
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Covered area
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Positioned for Rectangle {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    fn name(&self) -> &str {
        "rectangle"
    }
}

/// Move `shape` to an absolute position
pub fn move_to<S: Positioned + ?Sized>(shape: &mut S, x: i32, y: i32) {
    shape.set_x(x);
    shape.set_y(y);
}

/// Shift every shape horizontally by `dx`, wrapping at the `i32` bounds
pub fn shift_all_x<'a, S, I>(shapes: I, dx: i32)
where
    S: Positioned + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut S>,
{
    for shape in shapes {
        let x = shape.x();
        shape.set_x(x.wrapping_add(dx));
    }
}

/// Human-readable position, e.g. `rectangle at (3, 4)`
pub fn describe<S: Positioned + ?Sized>(shape: &S) -> String {
    format!(
        "{} at ({}, {})",
        display_name(shape.name()),
        shape.x(),
        shape.y()
    )
}

/// Invoke the operation shapes do not support
pub fn unsupported_operation<S: Positioned + ?Sized>(shape: &S) -> Result<(), ShapeError> {
    Err(ShapeError::Unsupported {
        operation: "unsupported_operation",
        shape: display_name(shape.name()).to_string(),
    })
}
