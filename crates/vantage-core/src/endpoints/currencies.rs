use serde::Serialize;

use crate::client::Query;
use crate::decode::{DecodeError, FromRow, Row};
use crate::{Client, Error};

const DIGITAL_CURRENCY_LIST: &str = "/digital_currency_list/";
const PHYSICAL_CURRENCY_LIST: &str = "/physical_currency_list/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

impl FromRow for Currency {
    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            code: row.text("currency code")?,
            name: row.text("currency name")?,
        })
    }
}

impl Client {
    /// Streams every cryptocurrency the provider knows about.
    pub async fn digital_currencies<F, E>(&self, consumer: F) -> Result<(), E>
    where
        F: FnMut(Currency) -> Result<(), E>,
        E: From<Error>,
    {
        self.for_each_csv(DIGITAL_CURRENCY_LIST, Query::new(), consumer)
            .await
    }

    /// Streams every fiat currency the provider knows about.
    pub async fn physical_currencies<F, E>(&self, consumer: F) -> Result<(), E>
    where
        F: FnMut(Currency) -> Result<(), E>,
        E: From<Error>,
    {
        self.for_each_csv(PHYSICAL_CURRENCY_LIST, Query::new(), consumer)
            .await
    }
}
