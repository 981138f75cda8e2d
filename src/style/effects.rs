//! Shape effect configuration: shadows, glow, and soft edges.

use crate::common::Color;
use crate::node::{config_node, validate};

config_node! {
    /// Outer drop shadow for a shape or chart element.
    ///
    /// The geometry fields keep Excel's preset values (4pt blur, 3pt offset,
    /// 60% transparency) even while the shadow is disabled, so enabling it
    /// reproduces the preset look.
    pub struct Shadow, options ShadowOptions, wire "shadow" {
        values {
            /// Whether the shadow is drawn.
            enabled, set_enabled: bool,
            wire "enabled",
            default false,
            validate validate::any;
            /// Shadow color.
            color, set_color: Color,
            wire "color",
            default Color::BLACK,
            validate validate::any;
            /// Blur radius in points (0-100).
            blur, set_blur: f64,
            wire "blur",
            default 4.0,
            validate validate::percentage;
            /// Horizontal offset in points (-100 to 100).
            offset_x, set_offset_x: f64,
            wire "offset-x",
            default 3.0,
            validate validate::offset;
            /// Vertical offset in points (-100 to 100).
            offset_y, set_offset_y: f64,
            wire "offset-y",
            default 3.0,
            validate validate::offset;
            /// Transparency as a fraction of one (0.0-1.0).
            transparency, set_transparency: f64,
            wire "transparency",
            default 0.6,
            validate validate::fraction;
        }
        nodes {}
    }
}

config_node! {
    /// Glow effect around a shape.
    pub struct Glow, options GlowOptions, wire "glow" {
        values {
            /// Glow radius in points; 0 disables the effect.
            radius, set_radius: f64,
            wire "radius",
            default 0.0,
            validate validate::percentage;
            /// Glow color.
            color, set_color: Color,
            wire "color",
            default Color::new(0x44, 0x72, 0xC4),
            validate validate::any;
        }
        nodes {}
    }
}

config_node! {
    /// Soft-edge effect for a shape.
    pub struct SoftEdge, options SoftEdgeOptions, wire "soft-edge" {
        values {
            /// Edge radius in points; 0 disables the effect.
            radius, set_radius: f64,
            wire "radius",
            default 0.0,
            validate validate::percentage;
        }
        nodes {}
    }
}

config_node! {
    /// The full effect set that can be applied to a shape or chart.
    pub struct ShapeEffects, options ShapeEffectsOptions, wire "effects" {
        values {}
        nodes {
            /// Drop shadow.
            shadow, shadow_mut: Shadow > ShadowOptions,
            wire "shadow";
            /// Glow.
            glow, glow_mut: Glow > GlowOptions,
            wire "glow";
            /// Soft edge.
            soft_edge, soft_edge_mut: SoftEdge > SoftEdgeOptions,
            wire "soft-edge";
        }
    }
}
