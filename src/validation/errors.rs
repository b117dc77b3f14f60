use thiserror::Error;

use crate::models::Transaction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Transaction ID [{transaction_id}] must start with 'T'")]
    InvalidTransactionId {
        transaction_id: String
    },
    #[error("Product ID [{product_id}] for transaction [{transaction_id}] must start with 'P'")]
    InvalidProductId {
        transaction_id: String,
        product_id: String
    },
    #[error("Customer ID [{customer_id}] for transaction [{transaction_id}] must start with 'C'")]
    InvalidCustomerId {
        transaction_id: String,
        customer_id: String
    },
    #[error("Quantity and unit price must be positive for transaction [{transaction_id}]")]
    NonPositiveAmount {
        transaction_id: String
    },
    #[error("Sale amount overflowed for transaction [{transaction_id}]")]
    Overflow {
        transaction_id: String
    }
}

impl ValidationError {
    pub fn invalid_transaction_id(tx: &Transaction) -> Self {
        Self::InvalidTransactionId { transaction_id: tx.transaction_id.clone() }
    }

    pub fn invalid_product_id(tx: &Transaction) -> Self {
        Self::InvalidProductId {
            transaction_id: tx.transaction_id.clone(),
            product_id: tx.product_id.clone()
        }
    }

    pub fn invalid_customer_id(tx: &Transaction) -> Self {
        Self::InvalidCustomerId {
            transaction_id: tx.transaction_id.clone(),
            customer_id: tx.customer_id.clone()
        }
    }

    pub fn non_positive_amount(tx: &Transaction) -> Self {
        Self::NonPositiveAmount { transaction_id: tx.transaction_id.clone() }
    }

    pub fn overflow(tx: &Transaction) -> Self {
        Self::Overflow { transaction_id: tx.transaction_id.clone() }
    }
}
