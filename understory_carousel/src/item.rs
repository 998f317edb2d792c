// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel items and intrinsic size resolution.

use kurbo::Size;

use crate::error::CarouselError;

/// An item on the ring: the host's handle and its intrinsic size.
///
/// The size is resolved once, when the item is added.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselItem<H> {
    handle: H,
    size: Size,
}

impl<H> CarouselItem<H> {
    pub(crate) fn new(handle: H, size: Size) -> Self {
        Self { handle, size }
    }

    /// The host's handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Size of the item when focused.
    pub fn intrinsic_size(&self) -> Size {
        self.size
    }
}

/// Resolve an item's intrinsic size.
///
/// Each axis of `supplied` that is positive wins. Other axes fall back to the measured size.
/// `measure` is only called when an axis needs it. An item that cannot be measured is rejected
/// unless both axes were supplied.
pub(crate) fn resolve_size(
    index: usize,
    supplied: Option<Size>,
    measure: impl FnOnce() -> Option<Size>,
) -> Result<Size, CarouselError> {
    if let Some(s) = supplied {
        check(index, s)?;
        if s.width > 0.0 && s.height > 0.0 {
            return Ok(s);
        }
    }
    let resolved = match (supplied, measure()) {
        (Some(s), Some(m)) => {
            check(index, m)?;
            Size::new(
                if s.width > 0.0 { s.width } else { m.width },
                if s.height > 0.0 { s.height } else { m.height },
            )
        }
        (None, Some(m)) => m,
        (_, None) => return Err(CarouselError::UnmeasurableItem { index }),
    };
    check(index, resolved)?;
    Ok(resolved)
}

fn check(index: usize, size: Size) -> Result<(), CarouselError> {
    if size.width >= 0.0 && size.height >= 0.0 && size.is_finite() {
        Ok(())
    } else {
        Err(CarouselError::InvalidItemSize {
            index,
            width: size.width,
            height: size.height,
        })
    }
}
