// crates/folio-core/src/tilt.rs
// Pointer-tracked tilt transforms and floating preview animations

pub const CARD_ENTER_TRANSITION: &str = "transform 0.3s ease, box-shadow 0.3s ease";
pub const CARD_REST_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

pub const PORTRAIT_FAST_TRANSITION: &str = "transform 0.1s ease-out";
pub const PORTRAIT_SETTLE_TRANSITION: &str = "transform 0.5s ease-out";
pub const PORTRAIT_REST_TRANSFORM: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg)";

/// Element bounds in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Card transform, lifted slightly while hovered
    pub fn card_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-4px)",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn portrait_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Card rotation: linear in the pointer's offset from center, `divisor` px per degree
pub fn card_tilt(bounds: Bounds, client_x: f64, client_y: f64, divisor: f64) -> Tilt {
    let x = client_x - bounds.left;
    let y = client_y - bounds.top;
    let center_x = bounds.width / 2.0;
    let center_y = bounds.height / 2.0;

    Tilt {
        rotate_x: (y - center_y) / divisor,
        rotate_y: (center_x - x) / divisor,
    }
}

/// Portrait rotation: pointer offset normalized to the half-size, scaled to
/// `max_deg` at the edges. A collapsed element stays flat.
pub fn portrait_tilt(bounds: Bounds, client_x: f64, client_y: f64, max_deg: f64) -> Tilt {
    let center_x = bounds.width / 2.0;
    let center_y = bounds.height / 2.0;
    if center_x <= 0.0 || center_y <= 0.0 {
        return Tilt::default();
    }

    let x = client_x - bounds.left;
    let y = client_y - bounds.top;
    Tilt {
        rotate_x: ((y - center_y) / center_y) * -max_deg,
        rotate_y: ((x - center_x) / center_x) * max_deg,
    }
}

/// `animation` and `animation-delay` for the n-th floating preview card
pub fn float_animation(index: usize) -> (String, String) {
    let i = index as f64;
    (
        format!("float {}s ease-in-out infinite", 3.0 + i * 0.5),
        format!("{}ms", index * 300),
    )
}
