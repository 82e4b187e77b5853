//! Resource limits for texture operations.
//!
//! [`ResourceLimits`] caps texture dimensions and buffer sizes. [`LimitExceeded`]
//! is returned when a check fails. Jobs run the checks before allocating any
//! output, so oversized requests are rejected without touching pixel data.

/// Resource limits for encode/decode jobs.
///
/// All fields are optional; `None` means no limit for that resource.
///
/// # Example
///
/// ```
/// use f3d_texture::ResourceLimits;
///
/// let limits = ResourceLimits::none()
///     .with_max_width(1024)
///     .with_max_height(1024)
///     .with_max_memory(16 * 1024 * 1024);
/// assert!(limits.check_dimensions(64, 32).is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResourceLimits {
    /// Maximum total pixels (width × height).
    pub max_pixels: Option<u64>,
    /// Maximum size of any buffer the job allocates, in bytes.
    pub max_memory_bytes: Option<u64>,
    /// Maximum texture width in pixels.
    pub max_width: Option<u32>,
    /// Maximum texture height in pixels.
    pub max_height: Option<u32>,
}

impl ResourceLimits {
    /// No limits (all fields `None`).
    pub fn none() -> Self {
        Self::default()
    }

    /// Set maximum total pixels.
    pub fn with_max_pixels(mut self, max: u64) -> Self {
        self.max_pixels = Some(max);
        self
    }

    /// Set maximum allocation in bytes.
    pub fn with_max_memory(mut self, bytes: u64) -> Self {
        self.max_memory_bytes = Some(bytes);
        self
    }

    /// Set maximum texture width in pixels.
    pub fn with_max_width(mut self, width: u32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set maximum texture height in pixels.
    pub fn with_max_height(mut self, height: u32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Whether any limits are set.
    pub fn has_any(&self) -> bool {
        self.max_pixels.is_some()
            || self.max_memory_bytes.is_some()
            || self.max_width.is_some()
            || self.max_height.is_some()
    }

    /// Check width, height and pixel count.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_width
            && width > max
        {
            return Err(LimitExceeded::Width { actual: width, max });
        }
        if let Some(max) = self.max_height
            && height > max
        {
            return Err(LimitExceeded::Height {
                actual: height,
                max,
            });
        }
        if let Some(max) = self.max_pixels {
            let pixels = width as u64 * height as u64;
            if pixels > max {
                return Err(LimitExceeded::Pixels {
                    actual: pixels,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Check a planned allocation size.
    pub fn check_memory(&self, bytes: u64) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_memory_bytes
            && bytes > max
        {
            return Err(LimitExceeded::Memory { actual: bytes, max });
        }
        Ok(())
    }
}

/// A resource limit was exceeded.
///
/// Each variant carries the actual value and the limit that was exceeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LimitExceeded {
    /// Texture width exceeded `max_width`.
    Width {
        /// Actual width.
        actual: u32,
        /// Maximum allowed.
        max: u32,
    },
    /// Texture height exceeded `max_height`.
    Height {
        /// Actual height.
        actual: u32,
        /// Maximum allowed.
        max: u32,
    },
    /// Pixel count exceeded `max_pixels`.
    Pixels {
        /// Actual pixel count.
        actual: u64,
        /// Maximum allowed.
        max: u64,
    },
    /// An allocation exceeded `max_memory_bytes`.
    Memory {
        /// Planned allocation in bytes.
        actual: u64,
        /// Maximum allowed.
        max: u64,
    },
}

impl core::fmt::Display for LimitExceeded {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Width { actual, max } => write!(f, "width {actual} exceeds limit {max}"),
            Self::Height { actual, max } => write!(f, "height {actual} exceeds limit {max}"),
            Self::Pixels { actual, max } => {
                write!(f, "pixel count {actual} exceeds limit {max}")
            }
            Self::Memory { actual, max } => {
                write!(f, "memory {actual} bytes exceeds limit {max}")
            }
        }
    }
}

impl core::error::Error for LimitExceeded {}
