//! Compiles raw request parameters into a [`Predicate`] and an optional
//! [`Pagination`] window.
//!
//! The predicate is a plain list of `(field, comparison)` pairs joined with
//! AND. It carries no SQL: rendering into a parametrized statement happens in
//! the infrastructure layer, and the same predicate value renders both the
//! row fetch and the row count. Only rows whose soft-delete marker is unset
//! are ever eligible; that condition is implicit and never part of the list.

use crate::domain::{
    common::entities::app_errors::CoreError,
    merchant::value_objects::{MerchantQuery, OFFSET_PARAM, PAGE_PARAM, Pagination},
};

/// Literal request value meaning "no filter on this field".
pub const UNSET_SENTINEL: &str = "null";

const SET_DELIMITER: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MerchantField {
    Id,
    CategoryId,
    AreaId,
    Name,
    Address,
    Latitude,
    Longitude,
    Phone,
    Description,
    Image,
    Delivery,
    TimeStart,
    TimeEnd,
    Facebook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
}

impl MerchantField {
    /// Accepts both the column name and its camelCase alias.
    pub fn from_param(name: &str) -> Option<Self> {
        let field = match name {
            "id" | "mb_merchant_id" => MerchantField::Id,
            "categoryId" | "mb_category_id" => MerchantField::CategoryId,
            "areaId" | "area_id" => MerchantField::AreaId,
            "name" => MerchantField::Name,
            "address" => MerchantField::Address,
            "latitude" => MerchantField::Latitude,
            "longitude" => MerchantField::Longitude,
            "phone" => MerchantField::Phone,
            "description" => MerchantField::Description,
            "image" => MerchantField::Image,
            "delivery" => MerchantField::Delivery,
            "timeStart" | "time_start" => MerchantField::TimeStart,
            "timeEnd" | "time_end" => MerchantField::TimeEnd,
            "facebook" => MerchantField::Facebook,
            _ => return None,
        };

        Some(field)
    }

    pub fn column(&self) -> &'static str {
        match self {
            MerchantField::Id => "mb_merchant_id",
            MerchantField::CategoryId => "mb_category_id",
            MerchantField::AreaId => "area_id",
            MerchantField::Name => "name",
            MerchantField::Address => "address",
            MerchantField::Latitude => "latitude",
            MerchantField::Longitude => "longitude",
            MerchantField::Phone => "phone",
            MerchantField::Description => "description",
            MerchantField::Image => "image",
            MerchantField::Delivery => "delivery",
            MerchantField::TimeStart => "time_start",
            MerchantField::TimeEnd => "time_end",
            MerchantField::Facebook => "facebook",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            MerchantField::Id
            | MerchantField::CategoryId
            | MerchantField::AreaId
            | MerchantField::Delivery => FieldKind::Integer,
            MerchantField::Latitude | MerchantField::Longitude => FieldKind::Float,
            MerchantField::Name
            | MerchantField::Address
            | MerchantField::Phone
            | MerchantField::Description
            | MerchantField::Image
            | MerchantField::TimeStart
            | MerchantField::TimeEnd
            | MerchantField::Facebook => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Equals(FilterValue),
    OneOf(Vec<FilterValue>),
    /// Case-insensitive substring match.
    Contains(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: MerchantField,
    pub comparison: Comparison,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: i64) -> Self {
        Self::new().and(Condition {
            field: MerchantField::Id,
            comparison: Comparison::Equals(FilterValue::Integer(id)),
        })
    }

    /// Name search. A blank keyword yields the unfiltered predicate; the
    /// `"null"` sentinel is not special here and is searched for literally.
    pub fn keyword(keyword: &str) -> Self {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Self::new();
        }

        Self::new().and(Condition {
            field: MerchantField::Name,
            comparison: Comparison::Contains(keyword.to_string()),
        })
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_unfiltered(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledQuery {
    pub predicate: Predicate,
    pub pagination: Option<Pagination>,
}

pub fn compile(query: &MerchantQuery) -> Result<CompiledQuery, CoreError> {
    let mut predicate = Predicate::new();

    for (key, value) in &query.filters {
        if let Some(condition) = compile_condition(key, value)? {
            predicate = predicate.and(condition);
        }
    }

    if let Some(keyword) = &query.keyword {
        for condition in Predicate::keyword(keyword).conditions {
            predicate = predicate.and(condition);
        }
    }

    let pagination = compile_pagination(query.page.as_deref(), query.offset.as_deref())?;

    Ok(CompiledQuery {
        predicate,
        pagination,
    })
}

/// A window is applied only when both parameters are supplied.
pub fn compile_pagination(
    page: Option<&str>,
    offset: Option<&str>,
) -> Result<Option<Pagination>, CoreError> {
    let (Some(page), Some(offset)) = (present(page), present(offset)) else {
        return Ok(None);
    };

    let page = parse_window_param(PAGE_PARAM, page)?;
    let offset = parse_window_param(OFFSET_PARAM, offset)?;

    Ok(Some(Pagination { page, offset }))
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_window_param(name: &str, raw: &str) -> Result<i64, CoreError> {
    let value = raw
        .parse::<i64>()
        .map_err(|_| CoreError::invalid_argument(format!("{name} must be a number")))?;

    if value < 0 {
        return Err(CoreError::invalid_argument(format!(
            "{name} could not be a negative number"
        )));
    }

    Ok(value)
}

fn is_unset(raw: &str) -> bool {
    raw.is_empty() || raw == UNSET_SENTINEL
}

fn compile_condition(key: &str, raw: &str) -> Result<Option<Condition>, CoreError> {
    let field = MerchantField::from_param(key)
        .ok_or_else(|| CoreError::invalid_argument(format!("unknown filter field: {key}")))?;

    if is_unset(raw.trim()) {
        return Ok(None);
    }

    let comparison = if raw.contains(SET_DELIMITER) {
        let values = raw
            .split(SET_DELIMITER)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| parse_value(key, field, part))
            .collect::<Result<Vec<FilterValue>, CoreError>>()?;

        if values.is_empty() {
            return Ok(None);
        }

        Comparison::OneOf(values)
    } else {
        Comparison::Equals(parse_value(key, field, raw.trim())?)
    };

    Ok(Some(Condition { field, comparison }))
}

fn parse_value(key: &str, field: MerchantField, raw: &str) -> Result<FilterValue, CoreError> {
    let not_a_number = || CoreError::invalid_argument(format!("{key} must be a number"));

    match field.kind() {
        FieldKind::Integer => raw
            .parse::<i64>()
            .map(FilterValue::Integer)
            .map_err(|_| not_a_number()),
        FieldKind::Float => raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(FilterValue::Float)
            .ok_or_else(not_a_number),
        FieldKind::Text => Ok(FilterValue::Text(raw.to_string())),
    }
}
