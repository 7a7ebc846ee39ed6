use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::event::Event;

/// Outcome of a completed drag: the host decides whether to apply it.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest<T = ()> {
    pub event: Event<T>,
    /// Start of the event before the move.
    pub from: NaiveDateTime,
    /// Day the event was dropped on.
    pub to: NaiveDate,
}

impl<T> MoveRequest<T> {
    /// Proposed start: the drop day at the original time of day.
    pub fn new_start(&self) -> NaiveDateTime {
        self.to.and_time(self.from.time())
    }

    /// Proposed end keeping the original duration, for ranged events. None
    /// when that end would fall past the last representable instant.
    pub fn new_end(&self) -> Option<NaiveDateTime> {
        self.event
            .end
            .and_then(|end| self.new_start().checked_add_signed(end - self.event.start))
    }

    /// Whole days between the original start day and the drop day.
    pub fn day_delta(&self) -> Duration {
        self.to - self.from.date()
    }
}

#[derive(Debug, Clone)]
pub struct DragContext<T = ()> {
    pub event: Event<T>,
    pub hovered_date: Option<NaiveDate>,
}

/// Bookkeeping for one in-flight drag. Transport (pointer, HTML5, touch) is
/// the host's concern; it only reports begin, hover, drop and cancel.
#[derive(Debug)]
pub struct DragSession<T = ()> {
    active: Option<DragContext<T>>,
}

impl<T> Default for DragSession<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: Clone> DragSession<T> {
    pub fn begin(&mut self, event: &Event<T>) {
        if self.active.is_some() {
            log::debug!("Replacing unfinished drag with '{}'", event.title);
        }
        self.active = Some(DragContext {
            event: event.clone(),
            hovered_date: Some(event.start.date()),
        });
    }
}

impl<T> DragSession<T> {
    pub fn active(&self) -> Option<&DragContext<T>> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn update_hover(&mut self, date: NaiveDate) {
        if let Some(context) = self.active.as_mut() {
            context.hovered_date = Some(date);
        }
    }

    /// Finish the drag on `target`, yielding the move to request.
    pub fn finish(&mut self, target: NaiveDate) -> Option<MoveRequest<T>> {
        let context = self.active.take()?;
        Some(MoveRequest {
            from: context.event.start,
            to: target,
            event: context.event,
        })
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}
