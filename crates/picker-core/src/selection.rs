// crates/picker-core/src/selection.rs
use crate::model::Country;
use serde::{Deserialize, Serialize};

/// One complete selection event. `dial_code` is empty when the country has
/// no calling code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub iso_code: String,
    pub dial_code: String,
}

impl From<&Country> for Selection {
    fn from(country: &Country) -> Self {
        Self {
            name: country.name.clone(),
            iso_code: country.iso_code.clone(),
            dial_code: country.dial_code().to_owned(),
        }
    }
}

/// Receives selection events from a picker.
///
/// Any `FnMut(&Selection)` closure is an observer too.
pub trait SelectionObserver {
    fn country_selected(&mut self, selection: &Selection);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&Selection),
{
    fn country_selected(&mut self, selection: &Selection) {
        self(selection)
    }
}

/// Registered observers, notified in registration order.
#[derive(Default)]
pub struct Observers {
    list: Vec<Box<dyn SelectionObserver>>,
}

impl Observers {
    pub fn add(&mut self, observer: impl SelectionObserver + 'static) {
        self.list.push(Box::new(observer));
    }

    pub fn notify(&mut self, selection: &Selection) {
        for observer in &mut self.list {
            observer.country_selected(selection);
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.list.len())
            .finish()
    }
}
