use crate::models::{Buyer, Rfq, Seller};

/// In-memory stand-in for the external store
///
/// Immutable lookup tables seeded once at startup. Nothing is created,
/// mutated, or destroyed per request; in production these would be
/// read-only query results from a database or API.
#[derive(Debug, Clone)]
pub struct Catalog {
    buyers: Vec<Buyer>,
    sellers: Vec<Seller>,
    rfqs: Vec<Rfq>,
}

impl Catalog {
    pub fn new(buyers: Vec<Buyer>, sellers: Vec<Seller>, rfqs: Vec<Rfq>) -> Self {
        Self {
            buyers,
            sellers,
            rfqs,
        }
    }

    /// Seed the catalog with the demo dataset.
    pub fn seed() -> Self {
        let buyers = vec![
            buyer("BUYER_01", "AutoParts Corp", "Automotive", "North America"),
            buyer("BUYER_02", "HealthGrid", "Healthcare", "Europe"),
        ];

        let sellers = vec![
            seller("FastBuild Steel", "Automotive", "North America", true, 0.9),
            seller("EuroMed Supplies", "Healthcare", "Europe", true, 0.4),
            seller("Global Parts Co", "Automotive", "APAC", false, 0.8),
            seller("Quality Medical", "Healthcare", "North America", true, 0.7),
        ];

        let rfqs = vec![
            rfq("RFQ-101", "AutoParts Corp", "Automotive", "North America", 50000.0),
            rfq("RFQ-102", "HealthGrid", "Healthcare", "Europe", 80000.0),
            rfq("RFQ-103", "NordBuild GmbH", "Industrial", "Europe", 120000.0),
            rfq("RFQ-104", "AutoParts Corp", "Automotive", "APAC", 30000.0),
        ];

        Self::new(buyers, sellers, rfqs)
    }

    pub fn buyers(&self) -> &[Buyer] {
        &self.buyers
    }

    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    pub fn rfqs(&self) -> &[Rfq] {
        &self.rfqs
    }

    pub fn buyer_by_id(&self, id: &str) -> Option<&Buyer> {
        self.buyers.iter().find(|b| b.id == id)
    }
}

fn buyer(id: &str, name: &str, industry: &str, region: &str) -> Buyer {
    Buyer {
        id: id.to_string(),
        name: name.to_string(),
        industry: industry.to_string(),
        region: region.to_string(),
    }
}

fn seller(name: &str, industry: &str, region: &str, is_certified: bool, capacity: f64) -> Seller {
    Seller {
        name: name.to_string(),
        industry: industry.to_string(),
        region: region.to_string(),
        is_certified,
        capacity,
    }
}

fn rfq(id: &str, buyer_name: &str, industry: &str, region: &str, budget: f64) -> Rfq {
    Rfq {
        id: id.to_string(),
        buyer_name: buyer_name.to_string(),
        industry: industry.to_string(),
        region: region.to_string(),
        budget,
    }
}
