//! Inline style for elements.

use crate::color::Color;
use taffy::{Dimension, Display, FlexDirection, style::Style as TaffyStyle};

/// Inline style of an element: the flexbox layout properties plus paint.
#[derive(Debug, Clone, Default)]
pub struct Style {
    /// Taffy layout style
    pub layout: TaffyStyle,

    /// Background color
    pub background_color: Option<Color>,
}

impl Style {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display mode.
    pub fn display(mut self, display: Display) -> Self {
        self.layout.display = display;
        self
    }

    /// Set a fixed width in pixels.
    pub fn width(mut self, width: f32) -> Self {
        self.layout.size.width = Dimension::Length(width);
        self
    }

    /// Set a fixed height in pixels.
    pub fn height(mut self, height: f32) -> Self {
        self.layout.size.height = Dimension::Length(height);
        self
    }

    /// Set flex direction.
    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.layout.flex_direction = direction;
        self
    }

    /// Set flex grow factor.
    pub fn flex_grow(mut self, grow: f32) -> Self {
        self.layout.flex_grow = grow;
        self
    }

    /// Set flex shrink factor.
    pub fn flex_shrink(mut self, shrink: f32) -> Self {
        self.layout.flex_shrink = shrink;
        self
    }

    /// Set flex basis in pixels.
    pub fn flex_basis(mut self, basis: f32) -> Self {
        self.layout.flex_basis = Dimension::Length(basis);
        self
    }

    /// Set background color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }
}
