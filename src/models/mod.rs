mod category;
mod month;
mod transaction;

pub(crate) use category::Category;
pub(crate) use month::{MonthKey, YEAR_RANGE};
pub(crate) use transaction::{
    clamp_amount, coerce_amount, parse_amount, NewTransaction, Transaction, TransactionId,
    TxnType, MAX_AMOUNT,
};
