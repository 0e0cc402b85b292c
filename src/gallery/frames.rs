//! Photo frames hung on the gallery walls.
//!
//! Frames occupy numbered slots: three on the back wall, three on the
//! left wall, then the right wall. Each photo load is tracked by a
//! [`LoadTicket`]; a result is applied only while the ticket is still the
//! frame's current one, so removing a frame before its image resolves
//! drops the late result instead of texturing a frame that no longer
//! exists.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::error::GalleryError;

/// Horizontal distance between neighbouring frames on a wall.
pub const FRAME_SPACING: f32 = 15.0;
/// Height of a frame's centre above the floor.
pub const FRAME_HEIGHT: f32 = 10.0;
/// Depth of the back-wall frames (just in front of the wall at `z = -30`).
pub const BACK_WALL_Z: f32 = -29.5;
/// Distance of the side-wall frames from the centre line (walls at `±40`).
pub const SIDE_WALL_X: f32 = 39.5;

/// Stable identity of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u32);

/// Token for one pending photo load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    frame: FrameId,
    generation: u64,
}

impl LoadTicket {
    /// The frame this load belongs to.
    #[must_use]
    pub fn frame(&self) -> FrameId {
        self.frame
    }
}

/// Where the photo in a frame stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoState {
    /// Waiting for the host to decode the image.
    Loading(LoadTicket),
    /// The photo texture is applied.
    Ready,
    /// The load failed; only the frame backing is shown.
    BackingOnly,
}

/// World placement of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlacement {
    /// Centre of the frame.
    pub position: Vec3,
    /// Rotation around world up, in radians.
    pub yaw: f32,
}

impl FramePlacement {
    /// Placement of the frame in `slot`.
    ///
    /// Slots 0–2 are spread along the back wall, 3–5 along the left wall
    /// facing right, and every later slot continues along the right wall
    /// facing left.
    #[must_use]
    pub fn for_slot(slot: usize) -> Self {
        let i = slot as f32;
        match slot {
            0..=2 => Self {
                position: Vec3::new(
                    (i - 1.0) * FRAME_SPACING,
                    FRAME_HEIGHT,
                    BACK_WALL_Z,
                ),
                yaw: 0.0,
            },
            3..=5 => Self {
                position: Vec3::new(
                    -SIDE_WALL_X,
                    FRAME_HEIGHT,
                    (i - 4.0) * FRAME_SPACING,
                ),
                yaw: FRAC_PI_2,
            },
            _ => Self {
                position: Vec3::new(
                    SIDE_WALL_X,
                    FRAME_HEIGHT,
                    (i - 7.0) * FRAME_SPACING,
                ),
                yaw: -FRAC_PI_2,
            },
        }
    }
}

/// A frame and the photo it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoFrame {
    /// Identity.
    pub id: FrameId,
    /// Slot index on the walls.
    pub slot: usize,
    /// World placement derived from the slot.
    pub placement: FramePlacement,
    /// Image reference handed to the host (data URL, path, ...).
    pub source: String,
    /// Load state of the photo.
    pub photo: PhotoState,
}

/// All frames currently hanging, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct PhotoFrames {
    frames: FxHashMap<FrameId, PhotoFrame>,
    /// Frame ids ordered by slot.
    order: Vec<FrameId>,
    next_id: u32,
    next_generation: u64,
}

impl PhotoFrames {
    /// No frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hang a new frame in the lowest free slot and start tracking its
    /// photo load.
    pub fn add(&mut self, source: impl Into<String>) -> (FrameId, LoadTicket) {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        let ticket = self.issue_ticket(id);
        let slot = self.lowest_free_slot();

        let frame = PhotoFrame {
            id,
            slot,
            placement: FramePlacement::for_slot(slot),
            source: source.into(),
            photo: PhotoState::Loading(ticket),
        };
        let _ = self.frames.insert(id, frame);

        let at = self
            .order
            .iter()
            .position(|other| {
                self.frames.get(other).is_some_and(|f| f.slot > slot)
            })
            .unwrap_or(self.order.len());
        self.order.insert(at, id);

        log::debug!("frame {id:?} hung in slot {slot}");
        (id, ticket)
    }

    /// Apply the outcome of a photo load.
    ///
    /// Returns `true` if the result was applied, `false` if the ticket is
    /// stale (frame removed or load superseded).
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<(), GalleryError>,
    ) -> bool {
        let Some(frame) = self.frames.get_mut(&ticket.frame) else {
            log::debug!("dropping photo load for removed {:?}", ticket.frame);
            return false;
        };
        if frame.photo != PhotoState::Loading(ticket) {
            log::debug!("dropping stale photo load for {:?}", ticket.frame);
            return false;
        }

        match result {
            Ok(()) => {
                frame.photo = PhotoState::Ready;
                log::info!("photo loaded into slot {}", frame.slot);
            }
            Err(e) => {
                frame.photo = PhotoState::BackingOnly;
                log::error!("photo load failed for slot {}: {e}", frame.slot);
            }
        }
        true
    }

    /// Take a frame down. Any pending load for it becomes stale.
    pub fn remove(&mut self, id: FrameId) -> Option<PhotoFrame> {
        let frame = self.frames.remove(&id)?;
        self.order.retain(|other| *other != id);
        Some(frame)
    }

    /// Look up a frame.
    #[must_use]
    pub fn get(&self, id: FrameId) -> Option<&PhotoFrame> {
        self.frames.get(&id)
    }

    /// Frames in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &PhotoFrame> {
        self.order.iter().filter_map(|id| self.frames.get(id))
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames are hanging.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames still waiting for their photo.
    #[must_use]
    pub fn pending_loads(&self) -> usize {
        self.frames
            .values()
            .filter(|f| matches!(f.photo, PhotoState::Loading(_)))
            .count()
    }

    fn issue_ticket(&mut self, frame: FrameId) -> LoadTicket {
        let ticket = LoadTicket {
            frame,
            generation: self.next_generation,
        };
        self.next_generation += 1;
        ticket
    }

    fn lowest_free_slot(&self) -> usize {
        // `order` is sorted by slot, so the first gap is the answer.
        let mut slot = 0;
        for frame in self.iter() {
            if frame.slot != slot {
                break;
            }
            slot += 1;
        }
        slot
    }
}
