use crate::{
    abstract_trait::{
        currency::repository::DynCurrencyQueryRepository,
        product_price::repository::DynProductPriceQueryRepository,
    },
    model::{
        currency::Currency as CurrencyModel,
        product::{Product as ProductModel, ProductWithRelations},
        product_price::{ProductPrice as ProductPriceModel, ProductPriceWithCurrency},
    },
};
use shared::errors::ServiceError;
use std::collections::{BTreeSet, HashMap};

/// Loads the base currency and the price overrides that belong to products.
#[derive(Clone)]
pub struct ProductRelations {
    currency_query: DynCurrencyQueryRepository,
    price_query: DynProductPriceQueryRepository,
}

impl ProductRelations {
    pub fn new(
        currency_query: DynCurrencyQueryRepository,
        price_query: DynProductPriceQueryRepository,
    ) -> Self {
        Self {
            currency_query,
            price_query,
        }
    }

    pub async fn load_one(
        &self,
        product: ProductModel,
    ) -> Result<ProductWithRelations, ServiceError> {
        let mut loaded = self.load_many(vec![product]).await?;
        loaded
            .pop()
            .ok_or_else(|| ServiceError::Internal("product relations were not loaded".into()))
    }

    /// Keeps the order of `products`. Two queries regardless of how many
    /// products are passed.
    pub async fn load_many(
        &self,
        products: Vec<ProductModel>,
    ) -> Result<Vec<ProductWithRelations>, ServiceError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        let prices = self.price_query.find_by_products(&product_ids).await?;

        let currency_ids: BTreeSet<i64> = products
            .iter()
            .map(|p| p.currency_id)
            .chain(prices.iter().map(|p| p.currency_id))
            .collect();
        let currencies = self.currencies_by_id(&currency_ids).await?;

        let mut prices_by_product: HashMap<i64, Vec<ProductPriceWithCurrency>> = HashMap::new();
        for price in prices {
            let currency = lookup(&currencies, price.currency_id)?;
            prices_by_product
                .entry(price.product_id)
                .or_default()
                .push(ProductPriceWithCurrency { price, currency });
        }

        products
            .into_iter()
            .map(|product| -> Result<ProductWithRelations, ServiceError> {
                let currency = lookup(&currencies, product.currency_id)?;
                let mut prices = prices_by_product.remove(&product.id).unwrap_or_default();
                prices.sort_by_key(|p| p.price.currency_id);

                Ok(ProductWithRelations {
                    product,
                    currency,
                    prices,
                })
            })
            .collect()
    }

    pub async fn attach_currencies(
        &self,
        prices: Vec<ProductPriceModel>,
    ) -> Result<Vec<ProductPriceWithCurrency>, ServiceError> {
        let currency_ids: BTreeSet<i64> = prices.iter().map(|p| p.currency_id).collect();
        let currencies = self.currencies_by_id(&currency_ids).await?;

        prices
            .into_iter()
            .map(|price| -> Result<ProductPriceWithCurrency, ServiceError> {
                let currency = lookup(&currencies, price.currency_id)?;
                Ok(ProductPriceWithCurrency { price, currency })
            })
            .collect()
    }

    async fn currencies_by_id(
        &self,
        ids: &BTreeSet<i64>,
    ) -> Result<HashMap<i64, CurrencyModel>, ServiceError> {
        let ids: Vec<i64> = ids.iter().copied().collect();
        let currencies = self.currency_query.find_by_ids(&ids).await?;

        Ok(currencies.into_iter().map(|c| (c.id, c)).collect())
    }
}

fn lookup(
    currencies: &HashMap<i64, CurrencyModel>,
    id: i64,
) -> Result<CurrencyModel, ServiceError> {
    currencies
        .get(&id)
        .cloned()
        .ok_or_else(|| ServiceError::Internal(format!("Currency not found with ID: {id}")))
}
