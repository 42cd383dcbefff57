#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    #[error("menu width must be positive, got {0}")]
    InvalidMenuWidth(f32),
    #[error("fling fraction must be within 0..=1, got {0}")]
    InvalidFlingFraction(f32),
    #[error("overlay alpha must be within 0..=1, got {0}")]
    InvalidOverlayAlpha(f32),
    #[error("gesture active area must be non-negative, got {0}")]
    InvalidActiveArea(f32),
}
