use crate::models::booking::BookingSubmission;
use crate::models::customer::{ContactInfo, CustomerInput};
use crate::models::house::{Frequency, HouseSizeBand};
use crate::models::promo::AppliedPromo;
use crate::models::rooms::RoomSelection;
use crate::models::schedule::TimeSlot;
use crate::models::service::{CartEntry, SelectedService, ServiceCatalogEntry, ServiceLine};
use crate::wizard::steps::BookingStep;

/// Everything one booking session has selected so far. Lives only in memory
/// until submission; all mutation goes through the named operations below.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    is_guest: bool,
    house_size: Option<HouseSizeBand>,
    frequency: Option<Frequency>,
    base_price: f64,
    rooms: RoomSelection,
    standard_services: Vec<SelectedService>,
    cart: Vec<CartEntry>,
    selected_date: Option<String>,
    selected_slot: Option<TimeSlot>,
    contact: ContactInfo,
    special_instructions: String,
    applied_promo: Option<AppliedPromo>,
}

impl BookingDraft {
    pub fn new(is_guest: bool) -> Self {
        Self {
            is_guest,
            house_size: None,
            frequency: None,
            base_price: 0.0,
            rooms: RoomSelection::default(),
            standard_services: Vec::new(),
            cart: Vec::new(),
            selected_date: None,
            selected_slot: None,
            contact: ContactInfo::default(),
            special_instructions: String::new(),
            applied_promo: None,
        }
    }

    pub fn is_guest(&self) -> bool {
        self.is_guest
    }

    pub fn house_size(&self) -> Option<HouseSizeBand> {
        self.house_size
    }

    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn rooms(&self) -> &RoomSelection {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> &mut RoomSelection {
        &mut self.rooms
    }

    pub fn standard_services(&self) -> &[SelectedService] {
        &self.standard_services
    }

    pub fn cart(&self) -> &[CartEntry] {
        &self.cart
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn selected_slot(&self) -> Option<&TimeSlot> {
        self.selected_slot.as_ref()
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn special_instructions(&self) -> &str {
        &self.special_instructions
    }

    pub fn applied_promo(&self) -> Option<&AppliedPromo> {
        self.applied_promo.as_ref()
    }

    pub fn set_house_size(&mut self, band: HouseSizeBand) {
        self.house_size = Some(band);
    }

    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = Some(frequency);
    }

    pub fn set_base_price(&mut self, base_price: f64) {
        self.base_price = base_price;
    }

    /// Toggle a standard service: selecting an already-selected one removes
    /// it, otherwise it is added with quantity 1. Returns true if the
    /// service is selected after the call.
    pub fn toggle_standard_service(&mut self, entry: &ServiceCatalogEntry) -> bool {
        if let Some(pos) = self
            .standard_services
            .iter()
            .position(|s| s.service_id == entry.id)
        {
            self.standard_services.remove(pos);
            false
        } else {
            self.standard_services.push(SelectedService {
                service_id: entry.id.clone(),
                service_name: entry.name.clone(),
                quantity: 1,
            });
            true
        }
    }

    pub fn is_standard_selected(&self, service_id: &str) -> bool {
        self.standard_services
            .iter()
            .any(|s| s.service_id == service_id)
    }

    /// Add one unit of an à-la-carte service, accumulating quantity when the
    /// item is already in the cart.
    pub fn add_a_la_carte(&mut self, entry: &ServiceCatalogEntry) {
        if let Some(item) = self.cart.iter_mut().find(|i| i.service_id == entry.id) {
            item.quantity += 1;
        } else {
            self.cart.push(CartEntry {
                service_id: entry.id.clone(),
                name: entry.name.clone(),
                unit_price: entry.unit_price(),
                quantity: 1,
            });
        }
    }

    /// Set an explicit cart quantity. Zero removes the entry; quantities are
    /// unsigned, so no negative value can be stored.
    pub fn set_cart_quantity(&mut self, service_id: &str, quantity: u32) {
        if quantity == 0 {
            self.cart.retain(|i| i.service_id != service_id);
            return;
        }
        if let Some(item) = self.cart.iter_mut().find(|i| i.service_id == service_id) {
            item.quantity = quantity;
        }
    }

    /// Selecting a date always invalidates any previously chosen time slot.
    pub fn select_date(&mut self, date: &str) {
        self.selected_date = Some(date.to_string());
        self.selected_slot = None;
    }

    pub fn select_time_slot(&mut self, slot: TimeSlot) {
        self.selected_slot = Some(slot);
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }

    pub fn set_special_instructions(&mut self, instructions: impl Into<String>) {
        self.special_instructions = instructions.into();
    }

    pub fn apply_promo(&mut self, promo: AppliedPromo) {
        self.applied_promo = Some(promo);
    }

    pub fn clear_promo(&mut self) {
        self.applied_promo = None;
    }

    /// Whether the draft is complete enough to enter `step`. Earlier steps
    /// are always enterable; there is no backward gating.
    pub fn can_enter(&self, step: BookingStep) -> bool {
        match step {
            BookingStep::ServiceAndSize => true,
            BookingStep::Rooms => self.house_size.is_some() && self.frequency.is_some(),
            BookingStep::AddOns | BookingStep::Date => true,
            BookingStep::Time => self.selected_date.is_some(),
            BookingStep::Contact => self.selected_slot.is_some(),
            BookingStep::Review => self.contact.has_required_fields(),
        }
    }

    /// Assemble the wire payload, or `None` while required selections are
    /// missing.
    pub fn to_submission(&self) -> Option<BookingSubmission> {
        let house_size = self.house_size?;
        let frequency = self.frequency?;
        let booking_date = self.selected_date.clone()?;
        let time_slot = self.selected_slot.as_ref()?.as_slot_string();

        let special_instructions = if self.special_instructions.trim().is_empty() {
            None
        } else {
            Some(self.special_instructions.trim().to_string())
        };

        Some(BookingSubmission {
            customer: CustomerInput::from_contact(&self.contact, self.is_guest),
            house_size,
            frequency,
            base_price: self.base_price,
            rooms: self.rooms.clone(),
            services: self
                .standard_services
                .iter()
                .map(|s| ServiceLine {
                    service_id: s.service_id.clone(),
                    quantity: s.quantity,
                })
                .collect(),
            a_la_carte_services: self
                .cart
                .iter()
                .map(|i| ServiceLine {
                    service_id: i.service_id.clone(),
                    quantity: i.quantity,
                })
                .collect(),
            booking_date,
            time_slot,
            special_instructions,
            promo_code: self
                .applied_promo
                .as_ref()
                .map(|p| p.promo.code.clone()),
        })
    }
}
