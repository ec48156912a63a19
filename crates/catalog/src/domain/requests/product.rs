use crate::domain::requests::rules::{not_blank, validate_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

/// Columns a product listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortColumn {
    Id,
    Name,
    Price,
    TaxCost,
    ManufacturingCost,
    CurrencyId,
    CreatedAt,
    UpdatedAt,
}

impl ProductSortColumn {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "tax_cost" => Some(Self::TaxCost),
            "manufacturing_cost" => Some(Self::ManufacturingCost),
            "currency_id" => Some(Self::CurrencyId),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
            Self::TaxCost => "tax_cost",
            Self::ManufacturingCost => "manufacturing_cost",
            Self::CurrencyId => "currency_id",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

fn validate_sort_column(value: &str) -> Result<(), ValidationError> {
    ProductSortColumn::parse(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("sort_column"))
}

fn validate_sort_order(value: &str) -> Result<(), ValidationError> {
    SortOrder::parse(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("sort_order"))
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    /// Case-insensitive substring of the product name.
    #[param(example = "laptop")]
    pub name: Option<String>,

    pub currency_id: Option<i64>,

    #[param(value_type = Option<f64>, example = 100.00)]
    pub min_price: Option<Decimal>,

    #[param(value_type = Option<f64>, example = 1000.00)]
    pub max_price: Option<Decimal>,

    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 1000000, message = "The page must be between 1 and 1000000."))]
    pub page: i64,

    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 100, message = "The per_page must be between 1 and 100."))]
    pub per_page: i64,

    #[serde(default = "default_sort_by")]
    #[validate(custom(function = "validate_sort_column"))]
    #[param(example = "price")]
    pub sort_by: String,

    #[serde(default = "default_sort_order")]
    #[validate(custom(function = "validate_sort_order"))]
    #[param(example = "desc")]
    pub sort_order: String,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    15
}

fn default_sort_by() -> String {
    "created_at".to_string()
}

fn default_sort_order() -> String {
    "desc".to_string()
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            name: None,
            currency_id: None,
            min_price: None,
            max_price: None,
            page: default_page(),
            per_page: default_per_page(),
            sort_by: default_sort_by(),
            sort_order: default_sort_order(),
        }
    }
}

impl FindAllProducts {
    /// Falls back to `created_at` for values that did not pass validation.
    pub fn sort_column(&self) -> ProductSortColumn {
        ProductSortColumn::parse(&self.sort_by).unwrap_or(ProductSortColumn::CreatedAt)
    }

    pub fn sort_direction(&self) -> SortOrder {
        SortOrder::parse(&self.sort_order).unwrap_or(SortOrder::Desc)
    }

    pub fn name_filter(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "The name field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    #[schema(example = "Laptop Dell XPS 13")]
    pub name: Option<String>,

    #[schema(example = "High-performance laptop")]
    pub description: Option<String>,

    #[validate(
        required(message = "The price field is required."),
        custom(function = "validate_money")
    )]
    #[schema(value_type = f64, example = 999.99)]
    pub price: Option<Decimal>,

    #[validate(required(message = "The currency_id field is required."))]
    #[schema(example = 1)]
    pub currency_id: Option<i64>,

    #[validate(
        required(message = "The tax_cost field is required."),
        custom(function = "validate_money")
    )]
    #[schema(value_type = f64, example = 150.00)]
    pub tax_cost: Option<Decimal>,

    #[validate(
        required(message = "The manufacturing_cost field is required."),
        custom(function = "validate_money")
    )]
    #[schema(value_type = f64, example = 500.00)]
    pub manufacturing_cost: Option<Decimal>,
}

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Every key is optional, but only `description` may be sent as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>, example = "Laptop Dell XPS 13 - Updated")]
    pub name: Option<Option<String>>,

    /// `null` clears the description; omitting the key leaves it unchanged.
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<f64>, example = 1099.99)]
    pub price: Option<Option<Decimal>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i64>, example = 1)]
    pub currency_id: Option<Option<i64>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<f64>, example = 165.00)]
    pub tax_cost: Option<Option<Decimal>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<f64>, example = 520.00)]
    pub manufacturing_cost: Option<Option<Decimal>>,
}

impl UpdateProductRequest {
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|name| name.as_deref())
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price.flatten()
    }

    pub fn currency_id(&self) -> Option<i64> {
        self.currency_id.flatten()
    }

    pub fn tax_cost(&self) -> Option<Decimal> {
        self.tax_cost.flatten()
    }

    pub fn manufacturing_cost(&self) -> Option<Decimal> {
        self.manufacturing_cost.flatten()
    }
}

fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    not_blank(name)?;
    if name.chars().count() > 255 {
        let mut err = ValidationError::new("length");
        err.message = Some("The name may not be greater than 255 characters.".into());
        return Err(err);
    }
    Ok(())
}

/// A present key must carry a value; its rule only runs when it does.
fn check_present<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<Option<T>>,
    rule: impl Fn(&T) -> Result<(), ValidationError>,
) {
    match value {
        Some(None) => errors.add(field, ValidationError::new("required")),
        Some(Some(inner)) => {
            if let Err(err) = rule(inner) {
                errors.add(field, err);
            }
        }
        None => {}
    }
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_present(&mut errors, "name", &self.name, |name: &String| {
            validate_product_name(name)
        });
        check_present(&mut errors, "price", &self.price, validate_money);
        check_present(&mut errors, "currency_id", &self.currency_id, |_| Ok(()));
        check_present(&mut errors, "tax_cost", &self.tax_cost, validate_money);
        check_present(
            &mut errors,
            "manufacturing_cost",
            &self.manufacturing_cost,
            validate_money,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A fully validated product ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency_id: i64,
    pub tax_cost: Decimal,
    pub manufacturing_cost: Decimal,
}

impl CreateProductRequest {
    /// Only meaningful after `validate()` succeeded.
    pub fn into_new_product(self) -> Option<NewProduct> {
        Some(NewProduct {
            name: self.name?,
            description: self.description,
            price: self.price?,
            currency_id: self.currency_id?,
            tax_cost: self.tax_cost?,
            manufacturing_cost: self.manufacturing_cost?,
        })
    }
}
