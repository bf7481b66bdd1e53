//! Layer-neutrale Hilfsfunktionen für Skripte und Export.
//!
//! Die Kurvensynthese selbst nutzt diese Funktionen nicht.

pub mod shape_ops;

pub use shape_ops::{
    angle, angle_between, elliptic_shape, ellipse_point, rotate, rotate_all, scale, scale_all,
    translate, translate_all, unit_vector,
};
