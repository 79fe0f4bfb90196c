use super::catalog::{self, ServiceOption, ADD_ONS, SERVICES};

/// Chosen services and add-ons. Both lists behave as sets and only ever hold
/// entries from the static catalogs; they keep the order things were toggled on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    service_ids: Vec<&'static str>,
    add_ons: Vec<&'static str>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or removes a service. Returns the new membership, or `None` when the
    /// id is not in the catalog (the selection is left untouched).
    pub fn toggle_service(&mut self, id: &str) -> Option<bool> {
        let service = catalog::find_service(id)?;
        Some(toggle(&mut self.service_ids, service.id))
    }

    /// Same as [`toggle_service`](Self::toggle_service) for add-on labels.
    pub fn toggle_add_on(&mut self, label: &str) -> Option<bool> {
        let label = ADD_ONS.iter().copied().find(|known| *known == label)?;
        Some(toggle(&mut self.add_ons, label))
    }

    pub fn is_service_selected(&self, id: &str) -> bool {
        self.service_ids.iter().any(|selected| *selected == id)
    }

    pub fn is_add_on_selected(&self, label: &str) -> bool {
        self.add_ons.iter().any(|selected| *selected == label)
    }

    pub fn service_count(&self) -> usize {
        self.service_ids.len()
    }

    pub fn has_services(&self) -> bool {
        !self.service_ids.is_empty()
    }

    /// Selected services in catalog order, whatever order they were picked in.
    pub fn services_in_catalog_order(&self) -> impl Iterator<Item = &'static ServiceOption> + '_ {
        SERVICES
            .iter()
            .filter(move |service| self.is_service_selected(service.id))
    }

    /// Selected add-ons in toggle order.
    pub fn add_ons(&self) -> &[&'static str] {
        &self.add_ons
    }
}

fn toggle(set: &mut Vec<&'static str>, entry: &'static str) -> bool {
    if let Some(pos) = set.iter().position(|existing| *existing == entry) {
        set.remove(pos);
        false
    } else {
        set.push(entry);
        true
    }
}
