use std::collections::{BTreeSet, HashMap, HashSet};

use rust_decimal::Decimal;

use crate::types::Quantity;

/// Groups keyed by text, kept in the order each key was first seen.
pub struct OrderedGroups<A> {
    positions: HashMap<String, usize>,
    groups: Vec<(String, A)>
}

impl<A: Default> OrderedGroups<A> {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            groups: Vec::new()
        }
    }

    pub fn entry(&mut self, key: &str) -> &mut A {
        let position = match self.positions.get(key) {
            Some(&position) => position,
            None => {
                let position = self.groups.len();
                self.positions.insert(key.to_string(), position);
                self.groups.push((key.to_string(), A::default()));
                position
            }
        };

        &mut self.groups[position].1
    }

    pub fn into_groups(self) -> Vec<(String, A)> {
        self.groups
    }
}

/// Running revenue, quantity and record count for a group.
///
/// Every `add_*` method either applies the whole record or, on overflow, nothing at all.
#[derive(Debug, Default)]
pub struct SalesAccumulator {
    pub revenue: Decimal,
    pub quantity: Quantity,
    pub count: usize
}

impl SalesAccumulator {
    pub fn add_sale(&mut self, amount: Decimal) -> bool {
        let Some(revenue) = self.revenue.checked_add(amount) else {
            return false;
        };

        self.revenue = revenue;
        self.count += 1;
        true
    }

    pub fn add_units(&mut self, quantity: Quantity, amount: Decimal) -> bool {
        let (Some(revenue), Some(total_quantity)) = (self.revenue.checked_add(amount), self.quantity.checked_add(quantity)) else {
            return false;
        };

        self.revenue = revenue;
        self.quantity = total_quantity;
        self.count += 1;
        true
    }
}

#[derive(Debug, Default)]
pub struct CustomerAccumulator {
    pub spent: Decimal,
    pub purchases: usize,
    pub products: BTreeSet<String>
}

impl CustomerAccumulator {
    pub fn add_purchase(&mut self, amount: Decimal, product_name: &str) -> bool {
        let Some(spent) = self.spent.checked_add(amount) else {
            return false;
        };

        self.spent = spent;
        self.purchases += 1;
        self.products.insert(product_name.to_string());
        true
    }
}

#[derive(Debug, Default)]
pub struct DailyAccumulator {
    pub revenue: Decimal,
    pub count: usize,
    pub customers: HashSet<String>
}

impl DailyAccumulator {
    pub fn add_sale(&mut self, amount: Decimal, customer_id: &str) -> bool {
        let Some(revenue) = self.revenue.checked_add(amount) else {
            return false;
        };

        self.revenue = revenue;
        self.count += 1;
        self.customers.insert(customer_id.to_string());
        true
    }
}
