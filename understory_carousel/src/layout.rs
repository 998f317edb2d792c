// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout engine: the item ring, ellipse geometry and immediate layout passes.
//!
//! ## Overview
//!
//! A layout pass ([`Carousel::layout`]):
//!
//! 1. recomputes the ellipse from the container width, `center_offset` and the radii,
//! 2. sets the container height to fit the largest item, the margins and the vertical radius,
//! 3. projects every item against the current focus and applies the transforms immediately,
//! 4. emits [`CarouselEvent::Init`].
//!
//! With no state change in between, two passes apply identical transforms.

use kurbo::{Point, Size};
use log::{debug, trace, warn};
use understory_ellipse::{
    EllipseGeometry, ProjectedTransform, ProjectionParams, angle_for, delta_index, project,
};

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::event::CarouselEvent;
use crate::host::{Animator, Surface, Timer};
use crate::item::{CarouselItem, resolve_size};

/// Ordered items plus the geometry they are projected onto.
#[derive(Clone, Debug)]
pub(crate) struct Ring<H> {
    items: Vec<CarouselItem<H>>,
    max_item_size: Size,
    geometry: EllipseGeometry,
}

impl<H> Ring<H> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            max_item_size: Size::ZERO,
            geometry: EllipseGeometry::default(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn items(&self) -> &[CarouselItem<H>] {
        &self.items
    }

    pub(crate) fn geometry(&self) -> EllipseGeometry {
        self.geometry
    }

    pub(crate) fn push(&mut self, item: CarouselItem<H>) {
        let size = item.intrinsic_size();
        self.max_item_size = Size::new(
            self.max_item_size.width.max(size.width),
            self.max_item_size.height.max(size.height),
        );
        self.items.push(item);
    }

    pub(crate) fn position_of(&self, handle: &H) -> Option<usize>
    where
        H: PartialEq,
    {
        self.items.iter().position(|item| item.handle() == handle)
    }

    /// Size needed to show the ring: the largest item plus margins and radii on both sides.
    ///
    /// An empty ring only needs its margins.
    pub(crate) fn content_size(&self, config: &CarouselConfig) -> Size {
        if self.is_empty() {
            return Size::new(2.0 * config.margin, 2.0 * config.margin);
        }
        Size::new(
            self.max_item_size.width + 2.0 * (config.margin + config.x_radius),
            self.max_item_size.height + 2.0 * (config.margin + config.y_radius),
        )
    }

    /// Recompute the ellipse for a container of size `container`.
    pub(crate) fn update_geometry(&mut self, container: Size, config: &CarouselConfig) {
        let center = Point::new(
            container.width / 2.0 + config.center_offset.x,
            config.center_offset.y + config.y_radius,
        );
        self.geometry = EllipseGeometry::new(center, config.x_radius, config.y_radius);
    }

    /// Project every item against `focus`, in ring order.
    pub(crate) fn project_all<'a>(
        &'a self,
        focus: usize,
        params: &'a ProjectionParams,
    ) -> impl Iterator<Item = (&'a CarouselItem<H>, ProjectedTransform)> + 'a {
        let count = self.items.len();
        self.items.iter().enumerate().map(move |(position, item)| {
            let delta = delta_index(position, focus, count);
            #[allow(
                clippy::cast_possible_wrap,
                reason = "Ring positions are far below isize::MAX."
            )]
            let theta = angle_for(delta as isize, count, params.power_exponent);
            let target = project(item.intrinsic_size(), theta, count, &self.geometry, params);
            trace!("item {position}: delta {delta}, theta {theta:.4}, {target:?}");
            (item, target)
        })
    }
}

impl<H, S, A, T> Carousel<H, S, A, T>
where
    H: Clone + PartialEq,
    S: Surface<H>,
    A: Animator<H>,
    T: Timer,
{
    /// Add an item, resolving its intrinsic size, and run a layout pass.
    ///
    /// Axes of `size` that are zero (or a missing `size`) are measured through
    /// [`Surface::measure`]. Fails without adding anything if the size cannot be determined or is
    /// not a finite, non-negative size.
    pub fn add_item(&mut self, handle: H, size: Option<Size>) -> Result<&mut Self, CarouselError> {
        let index = self.ring.len();
        let surface = &self.surface;
        let size = resolve_size(index, size, || surface.measure(&handle))?;
        if size.is_zero_area() {
            warn!("item {index} has zero area and will not be visible");
        }
        self.ring.push(CarouselItem::new(handle, size));
        debug!("added item {index} with size {size:?}");
        self.invalidate();
        Ok(self)
    }

    /// Add every handle, measuring each, then run one layout pass.
    ///
    /// All handles are measured before any is added: if one fails, none are added.
    pub fn add_items<I>(&mut self, handles: I) -> Result<&mut Self, CarouselError>
    where
        I: IntoIterator<Item = H>,
    {
        let start = self.ring.len();
        let mut staged = Vec::new();
        for (offset, handle) in handles.into_iter().enumerate() {
            let surface = &self.surface;
            let size = resolve_size(start + offset, None, || surface.measure(&handle))?;
            staged.push(CarouselItem::new(handle, size));
        }
        debug!("added {} items starting at {start}", staged.len());
        for item in staged {
            self.ring.push(item);
        }
        self.invalidate();
        Ok(self)
    }

    /// Size the container needs: the largest item plus margins and radii on each axis.
    ///
    /// An empty carousel needs only its margins.
    pub fn content_size(&self) -> Size {
        self.ring.content_size(&self.config)
    }

    /// Run an immediate layout pass, optionally moving the focus to `index` first.
    ///
    /// `index` wraps around the ring like [`go_to`](Self::go_to); it is ignored while the carousel
    /// is empty.
    pub fn layout(&mut self, index: Option<isize>) -> &mut Self {
        if let Some(index) = index {
            self.navigator.set(index, self.ring.len());
        }
        self.invalidate();
        self
    }

    pub(crate) fn invalidate(&mut self) {
        let container = self.surface.size();
        self.ring.update_geometry(container, &self.config);
        let height = self.ring.content_size(&self.config).height;
        self.surface.set_size(Size::new(container.width, height));

        let focus = self.navigator.current();
        debug!(
            "layout pass: {} items, focus {focus}, {:?}",
            self.ring.len(),
            self.ring.geometry()
        );
        for (item, target) in self.ring.project_all(focus, &self.params) {
            self.animator.apply_immediate(item.handle(), target);
        }
        self.events.push(CarouselEvent::Init);
    }
}
