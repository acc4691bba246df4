//! State guards that accept a single state or an aggregate.
//!
//! For an [`Aggregate`], `is_not_asked`, `is_loading`, `is_reloading` and
//! `is_failure` are true if *any* state matches, while `is_success` is
//! true only if *every* state succeeded.

use crate::aggregate::Aggregate;
use crate::state::RemoteData;

/// Lifecycle guards shared by single states and aggregates.
pub trait Guard {
    fn is_not_asked(&self) -> bool;
    fn is_loading(&self) -> bool;
    fn is_reloading(&self) -> bool;
    fn is_failure(&self) -> bool;
    fn is_success(&self) -> bool;
}

impl<E, D> Guard for RemoteData<E, D> {
    fn is_not_asked(&self) -> bool {
        RemoteData::is_not_asked(self)
    }

    fn is_loading(&self) -> bool {
        RemoteData::is_loading(self)
    }

    fn is_reloading(&self) -> bool {
        RemoteData::is_reloading(self)
    }

    fn is_failure(&self) -> bool {
        RemoteData::is_failure(self)
    }

    fn is_success(&self) -> bool {
        RemoteData::is_success(self)
    }
}

impl<E, D> Guard for Aggregate<E, D> {
    fn is_not_asked(&self) -> bool {
        self.any_not_asked()
    }

    fn is_loading(&self) -> bool {
        self.any_loading()
    }

    fn is_reloading(&self) -> bool {
        self.any_reloading()
    }

    fn is_failure(&self) -> bool {
        self.any_failure()
    }

    fn is_success(&self) -> bool {
        self.all_success()
    }
}

impl<G: Guard + ?Sized> Guard for &G {
    fn is_not_asked(&self) -> bool {
        (**self).is_not_asked()
    }

    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }

    fn is_reloading(&self) -> bool {
        (**self).is_reloading()
    }

    fn is_failure(&self) -> bool {
        (**self).is_failure()
    }

    fn is_success(&self) -> bool {
        (**self).is_success()
    }
}

pub fn is_not_asked<G: Guard + ?Sized>(value: &G) -> bool {
    value.is_not_asked()
}

pub fn is_loading<G: Guard + ?Sized>(value: &G) -> bool {
    value.is_loading()
}

pub fn is_reloading<G: Guard + ?Sized>(value: &G) -> bool {
    value.is_reloading()
}

pub fn is_failure<G: Guard + ?Sized>(value: &G) -> bool {
    value.is_failure()
}

/// For an aggregate, true only if every state succeeded.
pub fn is_success<G: Guard + ?Sized>(value: &G) -> bool {
    value.is_success()
}
