//! Render surfaces
//!
//! A [`Surface`] is a cheap, clonable handle to the visual properties of one
//! on-screen element. Screens, animators and layer hints all hold handles to
//! the same surface, so every change is visible to all of them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::SurfaceId;

/// Whether a surface takes part in drawing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Drawn and laid out
    #[default]
    Visible,
    /// Not drawn, not laid out
    Gone,
}

/// Compositing layer backing a surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayerType {
    /// Drawn directly into the parent
    #[default]
    None,
    /// Rendered into its own accelerated layer
    Hardware,
}

/// Animatable surface property
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceProperty {
    TranslationX,
    TranslationY,
    ScaleX,
    ScaleY,
    Alpha,
}

/// Visual properties of a surface
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceProps {
    pub visibility: Visibility,
    pub translation_x: f32,
    pub translation_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub alpha: f32,
    pub layer: LayerType,
    pub focused: bool,
}

impl Default for SurfaceProps {
    fn default() -> Self {
        Self {
            visibility: Visibility::Visible,
            translation_x: 0.0,
            translation_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            alpha: 1.0,
            layer: LayerType::None,
            focused: false,
        }
    }
}

/// Shared handle to a render surface
///
/// Handles are equal when they share the same underlying surface; the id is
/// only a label.
#[derive(Clone, Debug)]
pub struct Surface {
    id: SurfaceId,
    props: Rc<RefCell<SurfaceProps>>,
}

impl PartialEq for Surface {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.props, &other.props)
    }
}

impl Eq for Surface {}

impl Surface {
    /// Create a surface with default properties
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            props: Rc::new(RefCell::new(SurfaceProps::default())),
        }
    }

    /// Surface identifier
    #[inline]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Snapshot of the current properties
    pub fn props(&self) -> SurfaceProps {
        self.props.borrow().clone()
    }

    /// Read one animatable property
    pub fn get(&self, property: SurfaceProperty) -> f32 {
        let props = self.props.borrow();
        match property {
            SurfaceProperty::TranslationX => props.translation_x,
            SurfaceProperty::TranslationY => props.translation_y,
            SurfaceProperty::ScaleX => props.scale_x,
            SurfaceProperty::ScaleY => props.scale_y,
            SurfaceProperty::Alpha => props.alpha,
        }
    }

    /// Write one animatable property
    pub fn set(&self, property: SurfaceProperty, value: f32) {
        let mut props = self.props.borrow_mut();
        match property {
            SurfaceProperty::TranslationX => props.translation_x = value,
            SurfaceProperty::TranslationY => props.translation_y = value,
            SurfaceProperty::ScaleX => props.scale_x = value,
            SurfaceProperty::ScaleY => props.scale_y = value,
            SurfaceProperty::Alpha => props.alpha = value.clamp(0.0, 1.0),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.props.borrow().visibility
    }

    pub fn set_visibility(&self, visibility: Visibility) {
        self.props.borrow_mut().visibility = visibility;
    }

    pub fn layer(&self) -> LayerType {
        self.props.borrow().layer
    }

    pub fn set_layer(&self, layer: LayerType) {
        self.props.borrow_mut().layer = layer;
    }

    /// Check if the surface holds input focus
    pub fn is_focused(&self) -> bool {
        self.props.borrow().focused
    }

    /// Give input focus to this surface
    pub fn request_focus(&self) {
        self.props.borrow_mut().focused = true;
    }

    /// Drop input focus
    pub fn clear_focus(&self) {
        self.props.borrow_mut().focused = false;
    }

    /// Apply the fully-shown resting state: no offset, unit scale, opaque
    pub fn reset_to_identity(&self) {
        let mut props = self.props.borrow_mut();
        props.translation_x = 0.0;
        props.translation_y = 0.0;
        props.scale_x = 1.0;
        props.scale_y = 1.0;
        props.alpha = 1.0;
        props.visibility = Visibility::Visible;
    }
}
