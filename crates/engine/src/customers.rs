//! Derived per-customer summaries.
//!
//! A customer is not stored anywhere: it is the group of trips sharing the
//! exact `(customer_name, customer_phone)` pair, recomputed from the trip
//! sequence on every query.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Trip;

/// Summary of all trips recorded for one customer identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub trip_count: usize,
    pub total_earnings_minor: i64,
}

impl Customer {
    /// Exact-match identity test against a trip. No phone normalization: two
    /// spellings of the same number are two customers.
    #[must_use]
    pub fn matches(&self, trip: &Trip) -> bool {
        trip.customer_name == self.name && trip.customer_phone == self.phone
    }
}

/// Groups trips by exact `(name, phone)` identity.
///
/// The result is ordered by first appearance of each identity in the input
/// sequence, so repeated queries over a grown-only list keep earlier
/// customers in place.
pub fn customers(trips: &[Trip]) -> Vec<Customer> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut result: Vec<Customer> = Vec::new();

    for trip in trips {
        let key = (trip.customer_name.as_str(), trip.customer_phone.as_str());
        match index.get(&key) {
            Some(&at) => {
                let customer = &mut result[at];
                customer.trip_count += 1;
                customer.total_earnings_minor += trip.earnings_minor;
            }
            None => {
                index.insert(key, result.len());
                result.push(Customer {
                    name: trip.customer_name.clone(),
                    phone: trip.customer_phone.clone(),
                    trip_count: 1,
                    total_earnings_minor: trip.earnings_minor,
                });
            }
        }
    }

    result
}

/// Returns the trips belonging to `customer`, in insertion order.
pub fn trips_for_customer<'a>(customer: &Customer, trips: &'a [Trip]) -> Vec<&'a Trip> {
    trips.iter().filter(|trip| customer.matches(trip)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn trip(name: &str, phone: &str, earnings_minor: i64) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            customer_name: name.to_string(),
            customer_phone: phone.to_string(),
            earnings_minor,
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn groups_by_exact_name_and_phone() {
        let trips = vec![
            trip("A", "1", 1000),
            trip("A", "1", 500),
            trip("B", "2", 700),
        ];

        let result = customers(&trips);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "A");
        assert_eq!(result[0].trip_count, 2);
        assert_eq!(result[0].total_earnings_minor, 1500);
        assert_eq!(result[1].name, "B");
        assert_eq!(result[1].trip_count, 1);
        assert_eq!(result[1].total_earnings_minor, 700);
    }

    #[test]
    fn same_name_different_phone_is_a_different_customer() {
        let trips = vec![trip("A", "1", 1000), trip("A", "2", 500)];
        assert_eq!(customers(&trips).len(), 2);
    }

    #[test]
    fn conserves_counts_and_earnings() {
        let trips = vec![
            trip("A", "1", 10),
            trip("B", "2", 20),
            trip("A", "1", 30),
            trip("C", "3", 40),
            trip("B", "2", 50),
        ];

        let result = customers(&trips);
        let total_count: usize = result.iter().map(|c| c.trip_count).sum();
        let total_earnings: i64 = result.iter().map(|c| c.total_earnings_minor).sum();
        assert_eq!(total_count, trips.len());
        assert_eq!(
            total_earnings,
            trips.iter().map(|t| t.earnings_minor).sum::<i64>()
        );
    }

    #[test]
    fn trips_for_customer_keeps_insertion_order() {
        let trips = vec![
            trip("A", "1", 10),
            trip("B", "2", 20),
            trip("A", "1", 30),
        ];
        let result = customers(&trips);
        let selected = trips_for_customer(&result[0], &trips);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].earnings_minor, 10);
        assert_eq!(selected[1].earnings_minor, 30);
    }

    #[test]
    fn empty_input_yields_no_customers() {
        assert!(customers(&[]).is_empty());
    }
}
