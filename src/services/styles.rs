use crate::{
    db::DbPool,
    dto::styles::{
        ColorPartBody, ColorPartResponse, CreateStyleRequest, CreateStyleVariantRequest,
        StyleVariantResponse, UpdateStyleRequest, UpdateStyleVariantRequest,
    },
    entities::{
        sample, sample::Entity as SampleEntity, style_summary,
        style_summary::Entity as StyleSummaryEntity, style_variant,
        style_variant::Entity as StyleVariantEntity, variant_color_part,
        variant_color_part::Entity as VariantColorPartEntity,
    },
    errors::ServiceError,
};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Derives the display description for a variant's colorway. Multi-color
/// variants concatenate their parts in sort order; single-color variants use
/// the colour name verbatim. Never persisted.
pub fn full_color_description(
    variant: &style_variant::Model,
    parts: &[variant_color_part::Model],
) -> String {
    if variant.is_multicolor && !parts.is_empty() {
        parts
            .iter()
            .map(|part| format!("{}: {}", part.part_name, part.colour_name))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        variant.colour_name.clone()
    }
}

fn sizes_to_json(sizes: Option<Vec<String>>) -> Option<Value> {
    sizes.map(|labels| Value::Array(labels.into_iter().map(Value::String).collect()))
}

fn sizes_from_json(value: Option<&Value>) -> Option<Vec<String>> {
    value.and_then(|v| v.as_array()).map(|labels| {
        labels
            .iter()
            .filter_map(|label| label.as_str().map(str::to_string))
            .collect()
    })
}

/// Service for styles, style variants and their color parts.
#[derive(Clone)]
pub struct StyleCatalogService {
    db_pool: Arc<DbPool>,
}

impl StyleCatalogService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    fn connection(&self) -> &DatabaseConnection {
        self.db_pool.as_ref()
    }

    /// Creates a style summary. Duplicate style_id surfaces as a conflict.
    #[instrument(skip(self, req))]
    pub async fn create_style(
        &self,
        req: CreateStyleRequest,
    ) -> Result<style_summary::Model, ServiceError> {
        let db = self.connection();
        let model = style_summary::ActiveModel {
            id: Default::default(),
            buyer_id: Set(req.buyer_id),
            style_name: Set(req.style_name),
            style_id: Set(req.style_id),
            product_category: Set(req.product_category),
            product_type: Set(req.product_type),
            customs_customer_group: Set(req.customs_customer_group),
            type_of_construction: Set(req.type_of_construction),
            gauge: Set(req.gauge),
            style_description: Set(req.style_description),
            is_set: Set(req.is_set),
            set_piece_count: Set(req.set_piece_count),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        model.insert(db).await.map_err(ServiceError::db_error)
    }

    /// Returns style summaries, newest first.
    #[instrument(skip(self))]
    pub async fn list_styles(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<style_summary::Model>, ServiceError> {
        StyleSummaryEntity::find()
            .order_by_desc(style_summary::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get_style(&self, id: i32) -> Result<Option<style_summary::Model>, ServiceError> {
        StyleSummaryEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Applies a partial update; unset fields stay untouched.
    #[instrument(skip(self, req))]
    pub async fn update_style(
        &self,
        id: i32,
        req: UpdateStyleRequest,
    ) -> Result<style_summary::Model, ServiceError> {
        let db = self.connection();
        let model = StyleSummaryEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Style {} not found", id)))?;

        let mut active = model.into_active_model();
        if let Some(buyer_id) = req.buyer_id {
            active.buyer_id = Set(buyer_id);
        }
        if let Some(style_name) = req.style_name {
            active.style_name = Set(style_name);
        }
        if let Some(style_id) = req.style_id {
            active.style_id = Set(style_id);
        }
        if let Some(category) = req.product_category {
            active.product_category = Set(Some(category));
        }
        if let Some(product_type) = req.product_type {
            active.product_type = Set(Some(product_type));
        }
        if let Some(group) = req.customs_customer_group {
            active.customs_customer_group = Set(Some(group));
        }
        if let Some(construction) = req.type_of_construction {
            active.type_of_construction = Set(Some(construction));
        }
        if let Some(gauge) = req.gauge {
            active.gauge = Set(Some(gauge));
        }
        if let Some(description) = req.style_description {
            active.style_description = Set(Some(description));
        }
        if let Some(is_set) = req.is_set {
            active.is_set = Set(is_set);
        }
        if let Some(count) = req.set_piece_count {
            active.set_piece_count = Set(Some(count));
        }
        active.updated_at = Set(Some(Utc::now()));

        active.update(db).await.map_err(ServiceError::db_error)
    }

    /// Deletes a style summary. Blocked while dependent samples or variants
    /// still reference it; the error reports the exact counts.
    #[instrument(skip(self))]
    pub async fn delete_style(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = StyleSummaryEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Style {} not found", id)))?;

        let samples_count = SampleEntity::find()
            .filter(sample::Column::StyleId.eq(id))
            .count(db)
            .await
            .map_err(ServiceError::db_error)?;
        if samples_count > 0 {
            return Err(ServiceError::DependencyBlocked(format!(
                "Cannot delete style. {} sample(s) are using this style.",
                samples_count
            )));
        }

        let variants_count = StyleVariantEntity::find()
            .filter(style_variant::Column::StyleSummaryId.eq(id))
            .count(db)
            .await
            .map_err(ServiceError::db_error)?;
        if variants_count > 0 {
            return Err(ServiceError::DependencyBlocked(format!(
                "Cannot delete style. {} style variant(s) are using this style.",
                variants_count
            )));
        }

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    /// Creates a style variant. Only the variant's scalar fields are
    /// persisted here; color parts arrive through [`Self::add_color_part`].
    #[instrument(skip(self, req))]
    pub async fn create_variant(
        &self,
        req: CreateStyleVariantRequest,
    ) -> Result<StyleVariantResponse, ServiceError> {
        let db = self.connection();
        let model = style_variant::ActiveModel {
            id: Default::default(),
            style_summary_id: Set(req.style_summary_id),
            style_name: Set(req.style_name),
            style_id: Set(req.style_id),
            colour_name: Set(req.colour_name),
            colour_code: Set(req.colour_code),
            colour_ref: Set(req.colour_ref),
            is_multicolor: Set(req.is_multicolor),
            display_name: Set(req.display_name),
            piece_name: Set(req.piece_name),
            sizes: Set(sizes_to_json(req.sizes)),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let created = model.insert(db).await.map_err(ServiceError::db_error)?;
        self.map_variant(created).await
    }

    /// Returns variants, newest first, optionally scoped to one style.
    #[instrument(skip(self))]
    pub async fn list_variants(
        &self,
        style_summary_id: Option<i32>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<StyleVariantResponse>, ServiceError> {
        let db = self.connection();
        let mut query = StyleVariantEntity::find();
        if let Some(style_summary_id) = style_summary_id {
            query = query.filter(style_variant::Column::StyleSummaryId.eq(style_summary_id));
        }
        let variants = query
            .order_by_desc(style_variant::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(db)
            .await
            .map_err(ServiceError::db_error)?;

        let mut responses = Vec::with_capacity(variants.len());
        for variant in variants {
            responses.push(self.map_variant(variant).await?);
        }
        Ok(responses)
    }

    #[instrument(skip(self))]
    pub async fn get_variant(
        &self,
        id: i32,
    ) -> Result<Option<StyleVariantResponse>, ServiceError> {
        let variant = StyleVariantEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)?;

        match variant {
            Some(variant) => Ok(Some(self.map_variant(variant).await?)),
            None => Ok(None),
        }
    }

    /// Applies a partial update to a variant's scalar fields.
    #[instrument(skip(self, req))]
    pub async fn update_variant(
        &self,
        id: i32,
        req: UpdateStyleVariantRequest,
    ) -> Result<StyleVariantResponse, ServiceError> {
        let db = self.connection();
        let model = StyleVariantEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Style variant {} not found", id)))?;

        let mut active = model.into_active_model();
        if let Some(style_summary_id) = req.style_summary_id {
            active.style_summary_id = Set(style_summary_id);
        }
        if let Some(style_name) = req.style_name {
            active.style_name = Set(style_name);
        }
        if let Some(style_id) = req.style_id {
            active.style_id = Set(style_id);
        }
        if let Some(colour_name) = req.colour_name {
            active.colour_name = Set(colour_name);
        }
        if let Some(colour_code) = req.colour_code {
            active.colour_code = Set(Some(colour_code));
        }
        if let Some(colour_ref) = req.colour_ref {
            active.colour_ref = Set(Some(colour_ref));
        }
        if let Some(is_multicolor) = req.is_multicolor {
            active.is_multicolor = Set(is_multicolor);
        }
        if let Some(display_name) = req.display_name {
            active.display_name = Set(Some(display_name));
        }
        if let Some(piece_name) = req.piece_name {
            active.piece_name = Set(Some(piece_name));
        }
        if let Some(sizes) = req.sizes {
            active.sizes = Set(sizes_to_json(Some(sizes)));
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(db).await.map_err(ServiceError::db_error)?;
        self.map_variant(updated).await
    }

    /// Deletes a variant together with its color parts (exclusive ownership).
    #[instrument(skip(self))]
    pub async fn delete_variant(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = StyleVariantEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Style variant {} not found", id)))?;

        VariantColorPartEntity::delete_many()
            .filter(variant_color_part::Column::StyleVariantId.eq(id))
            .exec(db)
            .await
            .map_err(ServiceError::db_error)?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    /// Adds a color part to a variant.
    #[instrument(skip(self, part))]
    pub async fn add_color_part(
        &self,
        variant_id: i32,
        part: ColorPartBody,
    ) -> Result<ColorPartResponse, ServiceError> {
        let db = self.connection();
        let exists = StyleVariantEntity::find_by_id(variant_id)
            .select_only()
            .column(style_variant::Column::Id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?;
        if exists.is_none() {
            return Err(ServiceError::NotFound(format!(
                "Style variant {} not found",
                variant_id
            )));
        }

        let model = variant_color_part::ActiveModel {
            id: Default::default(),
            style_variant_id: Set(variant_id),
            part_name: Set(part.part_name),
            colour_name: Set(part.colour_name),
            colour_code: Set(part.colour_code),
            colour_ref: Set(part.colour_ref),
            sort_order: Set(part.sort_order),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let created = model.insert(db).await.map_err(ServiceError::db_error)?;
        Ok(Self::map_color_part(created))
    }

    /// Returns a variant's color parts in display order.
    #[instrument(skip(self))]
    pub async fn list_color_parts(
        &self,
        variant_id: i32,
    ) -> Result<Vec<ColorPartResponse>, ServiceError> {
        let parts = self.load_parts(variant_id).await?;
        Ok(parts.into_iter().map(Self::map_color_part).collect())
    }

    /// Removes one color part from a variant.
    #[instrument(skip(self))]
    pub async fn delete_color_part(
        &self,
        variant_id: i32,
        part_id: i32,
    ) -> Result<(), ServiceError> {
        let db = self.connection();
        let part = VariantColorPartEntity::find_by_id(part_id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?;

        let part = match part {
            Some(part) if part.style_variant_id == variant_id => part,
            Some(_) => {
                return Err(ServiceError::InvalidOperation(
                    "Color part does not belong to variant".to_string(),
                ))
            }
            None => {
                return Err(ServiceError::NotFound(format!(
                    "Color part {} not found",
                    part_id
                )))
            }
        };

        part.into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    async fn load_parts(
        &self,
        variant_id: i32,
    ) -> Result<Vec<variant_color_part::Model>, ServiceError> {
        VariantColorPartEntity::find()
            .filter(variant_color_part::Column::StyleVariantId.eq(variant_id))
            .order_by_asc(variant_color_part::Column::SortOrder)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    async fn map_variant(
        &self,
        variant: style_variant::Model,
    ) -> Result<StyleVariantResponse, ServiceError> {
        let db = self.connection();
        let parts = self.load_parts(variant.id).await?;
        let style = StyleSummaryEntity::find_by_id(variant.style_summary_id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?;

        let description = full_color_description(&variant, &parts);

        Ok(StyleVariantResponse {
            id: variant.id,
            style_summary_id: variant.style_summary_id,
            style_name: variant.style_name,
            style_id: variant.style_id,
            colour_name: variant.colour_name,
            colour_code: variant.colour_code,
            colour_ref: variant.colour_ref,
            is_multicolor: variant.is_multicolor,
            display_name: variant.display_name,
            piece_name: variant.piece_name,
            sizes: sizes_from_json(variant.sizes.as_ref()),
            style_category: style
                .as_ref()
                .and_then(|style| style.product_category.clone()),
            gauge: style.as_ref().and_then(|style| style.gauge.clone()),
            color_parts: parts.into_iter().map(Self::map_color_part).collect(),
            full_color_description: description,
            created_at: variant.created_at,
            updated_at: variant.updated_at,
        })
    }

    fn map_color_part(model: variant_color_part::Model) -> ColorPartResponse {
        ColorPartResponse {
            id: model.id,
            style_variant_id: model.style_variant_id,
            part_name: model.part_name,
            colour_name: model.colour_name,
            colour_code: model.colour_code,
            colour_ref: model.colour_ref,
            sort_order: model.sort_order,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(is_multicolor: bool, colour_name: &str) -> style_variant::Model {
        style_variant::Model {
            id: 1,
            style_summary_id: 1,
            style_name: "Polo Shirt".into(),
            style_id: "PS-001".into(),
            colour_name: colour_name.into(),
            colour_code: None,
            colour_ref: None,
            is_multicolor,
            display_name: None,
            piece_name: None,
            sizes: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn part(name: &str, colour: &str, sort_order: i32) -> variant_color_part::Model {
        variant_color_part::Model {
            id: sort_order,
            style_variant_id: 1,
            part_name: name.into(),
            colour_name: colour.into(),
            colour_code: None,
            colour_ref: None,
            sort_order,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn single_color_description_is_the_colour_name() {
        let v = variant(false, "Navy Blue");
        assert_eq!(full_color_description(&v, &[]), "Navy Blue");
    }

    #[test]
    fn multicolor_description_joins_parts_in_sort_order() {
        let v = variant(true, "Multi");
        let parts = vec![
            part("Body", "Navy Blue", 1),
            part("Collar", "White", 2),
            part("Sleeves", "Red", 3),
        ];
        assert_eq!(
            full_color_description(&v, &parts),
            "Body: Navy Blue, Collar: White, Sleeves: Red"
        );
    }

    #[test]
    fn multicolor_without_parts_falls_back_to_colour_name() {
        let v = variant(true, "Multi");
        assert_eq!(full_color_description(&v, &[]), "Multi");
    }

    #[test]
    fn sizes_round_trip_through_json() {
        let json = sizes_to_json(Some(vec!["S".into(), "M".into(), "L".into()]));
        assert_eq!(
            sizes_from_json(json.as_ref()),
            Some(vec!["S".to_string(), "M".to_string(), "L".to_string()])
        );
        assert_eq!(sizes_from_json(None), None);
    }
}
