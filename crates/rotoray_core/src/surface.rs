//! Material response at a point on an object.

use rotoray_math::Color;

/// How a surface responds to light.
///
/// `specular` doubles as the surface's reflectivity: it weights both the
/// Phong highlight and the contribution of the mirror-reflected ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Base color (RGB, 0-1)
    pub color: Color,

    /// Diffuse coefficient
    pub diffuse: f32,

    /// Specular coefficient, also used as reflectivity
    pub specular: f32,

    /// Phong highlight exponent
    pub highlight_exponent: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            color: Color::new(0.5, 0.5, 0.5), // Grey default
            diffuse: 1.0,
            specular: 0.0,
            highlight_exponent: 0.0,
        }
    }
}

impl Surface {
    /// Create a purely diffuse surface of the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the diffuse coefficient.
    pub fn with_diffuse(mut self, diffuse: f32) -> Self {
        self.diffuse = diffuse;
        self
    }

    /// Set the specular coefficient and highlight exponent.
    pub fn with_specular(mut self, specular: f32, highlight_exponent: f32) -> Self {
        self.specular = specular;
        self.highlight_exponent = highlight_exponent;
        self
    }

    /// Reflectivity used to weight mirror bounces off this surface.
    #[inline]
    pub fn reflectivity(&self) -> f32 {
        self.specular
    }
}
