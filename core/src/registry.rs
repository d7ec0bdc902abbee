//! In-memory business registry

use crate::business::{Business, BusinessUpdate, NewBusiness};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Name, location, and contact are required")]
    MissingRequiredField,

    #[error("Business not found")]
    NotFound(u64),
}

/// Ordered collection of business records, held in process memory.
///
/// Identifiers are assigned as `len + 1` at creation time. There is no
/// delete operation, so identifiers stay unique for the process
/// lifetime. Nothing is persisted across restarts.
#[derive(Debug, Default)]
pub struct Registry {
    businesses: Vec<Business>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with the five sample businesses
    /// (ids 1-5) used as baseline fixtures.
    pub fn with_seed_data() -> Self {
        Self {
            businesses: seed_businesses(),
        }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[Business] {
        &self.businesses
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    /// Register a new business.
    ///
    /// Fails without modifying the registry when name, location, or
    /// contact is missing or empty.
    pub fn create(&mut self, input: NewBusiness) -> Result<Business, RegistryError> {
        let name = non_empty(input.name).ok_or(RegistryError::MissingRequiredField)?;
        let location = non_empty(input.location).ok_or(RegistryError::MissingRequiredField)?;
        let contact = non_empty(input.contact).ok_or(RegistryError::MissingRequiredField)?;

        let business = Business {
            id: self.businesses.len() as u64 + 1,
            name,
            location,
            contact,
            products: input.products.unwrap_or_default(),
            services: input.services.unwrap_or_default(),
        };

        self.businesses.push(business.clone());
        Ok(business)
    }

    /// Overwrite fields of an existing record.
    ///
    /// Only fields carrying an effective value are applied: an omitted
    /// field, an empty string, or an empty list all mean "keep the
    /// current value". The id is never changed.
    pub fn update(&mut self, id: u64, update: BusinessUpdate) -> Result<Business, RegistryError> {
        let business = self
            .businesses
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        if let Some(name) = non_empty(update.name) {
            business.name = name;
        }
        if let Some(location) = non_empty(update.location) {
            business.location = location;
        }
        if let Some(contact) = non_empty(update.contact) {
            business.contact = contact;
        }
        if let Some(products) = update.products.filter(|p| !p.is_empty()) {
            business.products = products;
        }
        if let Some(services) = update.services.filter(|s| !s.is_empty()) {
            business.services = services;
        }

        Ok(business.clone())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The five fixture businesses present at startup.
fn seed_businesses() -> Vec<Business> {
    let entry = |id: u64,
                 name: &str,
                 location: &str,
                 contact: &str,
                 products: &[&str],
                 services: &[&str]| Business {
        id,
        name: name.to_string(),
        location: location.to_string(),
        contact: contact.to_string(),
        products: products.iter().map(|p| p.to_string()).collect(),
        services: services.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        entry(
            1,
            "Henry Store",
            "123 Calabar Road, Calabar, Cross River, Nigeria",
            "12345678",
            &["Clothing", "Electronics"],
            &["Delivery", "Customer Support"],
        ),
        entry(
            2,
            "Tech Hub",
            "456 Technology Avenue, Calabar, Cross River, Nigeria",
            "87654321",
            &["Laptops", "Smartphones"],
            &["Repair", "Setup Assistance"],
        ),
        entry(
            3,
            "Grocery Mart",
            "789 Market Street, Calabar, Cross River, Nigeria",
            "23456789",
            &["Groceries", "Household Items"],
            &["Home Delivery"],
        ),
        entry(
            4,
            "Book Nook",
            "101 Book Street, Calabar, Cross River, Nigeria",
            "34567890",
            &["Books", "Stationery"],
            &["Book Rentals", "Reading Events"],
        ),
        entry(
            5,
            "Fitness Center",
            "202 Fitness Drive, Calabar, Cross River, Nigeria",
            "45678901",
            &["Gym Equipment", "Supplements"],
            &["Personal Training", "Group Classes"],
        ),
    ]
}
