//! Core supplier domain types.

use serde::{Deserialize, Serialize};

use crate::database_id::SupplierId;

/// A business that products are bought from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Supplier {
    /// The ID of the supplier.
    pub id: SupplierId,
    /// The name of the business.
    pub supplier_name: String,
    /// Who to talk to at the business.
    pub supplier_contact_person: String,
    /// How to reach the contact person.
    pub supplier_contact_number: String,
}

/// The fields of a supplier without its ID.
///
/// This is the request body for creating a supplier and for replacing an
/// existing supplier, every field is required in both cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierData {
    /// The name of the business.
    pub supplier_name: String,
    /// Who to talk to at the business.
    pub supplier_contact_person: String,
    /// How to reach the contact person.
    pub supplier_contact_number: String,
}

impl SupplierData {
    pub(crate) fn with_id(self, id: SupplierId) -> Supplier {
        Supplier {
            id,
            supplier_name: self.supplier_name,
            supplier_contact_person: self.supplier_contact_person,
            supplier_contact_number: self.supplier_contact_number,
        }
    }
}
