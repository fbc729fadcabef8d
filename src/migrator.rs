use sea_orm_migration::prelude::*;

/// Embedded migrator for the clients store (buyers, suppliers).
pub struct ClientsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ClientsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240301_000001_create_client_tables::Migration)]
    }
}

/// Embedded migrator for the samples store (styles, variants, materials,
/// samples, timing, planning and master tables).
pub struct SamplesMigrator;

#[async_trait::async_trait]
impl MigratorTrait for SamplesMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000002_create_style_tables::Migration),
            Box::new(m20240301_000003_create_sample_tables::Migration),
            Box::new(m20240301_000004_create_planning_tables::Migration),
            Box::new(m20240301_000005_create_master_tables::Migration),
        ]
    }
}

// Migration implementations

mod m20240301_000001_create_client_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_client_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Buyers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Buyers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Buyers::BuyerName)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Buyers::ContactPerson).string().null())
                        .col(ColumnDef::new(Buyers::Email).string().null())
                        .col(ColumnDef::new(Buyers::Phone).string().null())
                        .col(ColumnDef::new(Buyers::Address).text().null())
                        .col(ColumnDef::new(Buyers::Country).string().null())
                        .col(ColumnDef::new(Buyers::Remarks).text().null())
                        .col(
                            ColumnDef::new(Buyers::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Buyers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Buyers::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::SupplierName)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Suppliers::SupplierType).string().null())
                        .col(ColumnDef::new(Suppliers::ContactPerson).string().null())
                        .col(ColumnDef::new(Suppliers::Email).string().null())
                        .col(ColumnDef::new(Suppliers::Phone).string().null())
                        .col(ColumnDef::new(Suppliers::Address).text().null())
                        .col(ColumnDef::new(Suppliers::Country).string().null())
                        .col(ColumnDef::new(Suppliers::Remarks).text().null())
                        .col(
                            ColumnDef::new(Suppliers::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Suppliers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Buyers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Buyers {
        Table,
        Id,
        BuyerName,
        ContactPerson,
        Email,
        Phone,
        Address,
        Country,
        Remarks,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Suppliers {
        Table,
        Id,
        SupplierName,
        SupplierType,
        ContactPerson,
        Email,
        Phone,
        Address,
        Country,
        Remarks,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000002_create_style_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_style_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(StyleSummaries::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(StyleSummaries::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        // Weak ref into the clients store - no FK on purpose
                        .col(ColumnDef::new(StyleSummaries::BuyerId).integer().not_null())
                        .col(ColumnDef::new(StyleSummaries::StyleName).string().not_null())
                        .col(
                            ColumnDef::new(StyleSummaries::StyleId)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(StyleSummaries::ProductCategory).string().null())
                        .col(ColumnDef::new(StyleSummaries::ProductType).string().null())
                        .col(
                            ColumnDef::new(StyleSummaries::CustomsCustomerGroup)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(StyleSummaries::TypeOfConstruction)
                                .string()
                                .null(),
                        )
                        .col(ColumnDef::new(StyleSummaries::Gauge).string().null())
                        .col(ColumnDef::new(StyleSummaries::StyleDescription).text().null())
                        .col(
                            ColumnDef::new(StyleSummaries::IsSet)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(StyleSummaries::SetPieceCount).integer().null())
                        .col(
                            ColumnDef::new(StyleSummaries::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StyleSummaries::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_style_summaries_buyer_id")
                        .table(StyleSummaries::Table)
                        .col(StyleSummaries::BuyerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(StyleVariants::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(StyleVariants::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(StyleVariants::StyleSummaryId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(StyleVariants::StyleName).string().not_null())
                        .col(ColumnDef::new(StyleVariants::StyleId).string().not_null())
                        .col(ColumnDef::new(StyleVariants::ColourName).string().not_null())
                        .col(ColumnDef::new(StyleVariants::ColourCode).string().null())
                        .col(ColumnDef::new(StyleVariants::ColourRef).string().null())
                        .col(
                            ColumnDef::new(StyleVariants::IsMulticolor)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(StyleVariants::DisplayName).string().null())
                        .col(ColumnDef::new(StyleVariants::PieceName).string().null())
                        .col(ColumnDef::new(StyleVariants::Sizes).json().null())
                        .col(
                            ColumnDef::new(StyleVariants::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StyleVariants::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_style_variants_style_summary")
                                .from(StyleVariants::Table, StyleVariants::StyleSummaryId)
                                .to(StyleSummaries::Table, StyleSummaries::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_style_variants_style_summary_id")
                        .table(StyleVariants::Table)
                        .col(StyleVariants::StyleSummaryId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(StyleVariantColors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(StyleVariantColors::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(StyleVariantColors::StyleVariantId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(StyleVariantColors::PartName).string().not_null())
                        .col(
                            ColumnDef::new(StyleVariantColors::ColourName)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(StyleVariantColors::ColourCode).string().null())
                        .col(ColumnDef::new(StyleVariantColors::ColourRef).string().null())
                        .col(
                            ColumnDef::new(StyleVariantColors::SortOrder)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(StyleVariantColors::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StyleVariantColors::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_style_variant_colors_variant")
                                .from(
                                    StyleVariantColors::Table,
                                    StyleVariantColors::StyleVariantId,
                                )
                                .to(StyleVariants::Table, StyleVariants::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(RequiredMaterials::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(RequiredMaterials::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(RequiredMaterials::StyleVariantId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(RequiredMaterials::StyleName).string().not_null())
                        .col(ColumnDef::new(RequiredMaterials::StyleId).string().not_null())
                        .col(ColumnDef::new(RequiredMaterials::Material).string().not_null())
                        .col(ColumnDef::new(RequiredMaterials::Uom).string().not_null())
                        .col(
                            ColumnDef::new(RequiredMaterials::ConsumptionPerPiece)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(RequiredMaterials::ConvertedUom).string().null())
                        .col(
                            ColumnDef::new(RequiredMaterials::ConvertedConsumption)
                                .decimal()
                                .null(),
                        )
                        .col(ColumnDef::new(RequiredMaterials::Remarks).text().null())
                        .col(
                            ColumnDef::new(RequiredMaterials::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RequiredMaterials::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_required_materials_variant")
                                .from(RequiredMaterials::Table, RequiredMaterials::StyleVariantId)
                                .to(StyleVariants::Table, StyleVariants::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(RequiredMaterials::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(StyleVariantColors::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(StyleVariants::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(StyleSummaries::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum StyleSummaries {
        Table,
        Id,
        BuyerId,
        StyleName,
        StyleId,
        ProductCategory,
        ProductType,
        CustomsCustomerGroup,
        TypeOfConstruction,
        Gauge,
        StyleDescription,
        IsSet,
        SetPieceCount,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum StyleVariants {
        Table,
        Id,
        StyleSummaryId,
        StyleName,
        StyleId,
        ColourName,
        ColourCode,
        ColourRef,
        IsMulticolor,
        DisplayName,
        PieceName,
        Sizes,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum StyleVariantColors {
        Table,
        Id,
        StyleVariantId,
        PartName,
        ColourName,
        ColourCode,
        ColourRef,
        SortOrder,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum RequiredMaterials {
        Table,
        Id,
        StyleVariantId,
        StyleName,
        StyleId,
        Material,
        Uom,
        ConsumptionPerPiece,
        ConvertedUom,
        ConvertedConsumption,
        Remarks,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000003_create_sample_tables {
    use super::m20240301_000002_create_style_tables::StyleSummaries;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000003_create_sample_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Samples::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Samples::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Samples::SampleId)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        // Weak ref into the clients store - no FK on purpose
                        .col(ColumnDef::new(Samples::BuyerId).integer().not_null())
                        .col(ColumnDef::new(Samples::StyleId).integer().not_null())
                        .col(ColumnDef::new(Samples::SampleType).string().not_null())
                        .col(ColumnDef::new(Samples::SampleDescription).text().null())
                        .col(ColumnDef::new(Samples::Item).string().null())
                        .col(ColumnDef::new(Samples::Gauge).string().null())
                        .col(
                            ColumnDef::new(Samples::WorksheetRcvDate)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Samples::YarnRcvDate)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Samples::RequiredDate)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Samples::Color).string().null())
                        .col(ColumnDef::new(Samples::AssignedDesigner).string().null())
                        .col(
                            ColumnDef::new(Samples::RequiredSampleQuantity)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Samples::Round)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .col(ColumnDef::new(Samples::Notes).text().null())
                        .col(ColumnDef::new(Samples::SubmitStatus).string().null())
                        .col(
                            ColumnDef::new(Samples::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Samples::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_samples_style_summary")
                                .from(Samples::Table, Samples::StyleId)
                                .to(StyleSummaries::Table, StyleSummaries::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_samples_buyer_id")
                        .table(Samples::Table)
                        .col(Samples::BuyerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SampleOperations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SampleOperations::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        // No FK: sample deletion leaves operations orphaned by design
                        .col(ColumnDef::new(SampleOperations::SampleId).integer().not_null())
                        .col(
                            ColumnDef::new(SampleOperations::OperationType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SampleOperations::NameOfOperation)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SampleOperations::NumberOfOperation)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .col(ColumnDef::new(SampleOperations::Size).string().null())
                        .col(ColumnDef::new(SampleOperations::Duration).double().null())
                        .col(ColumnDef::new(SampleOperations::TotalDuration).double().null())
                        .col(
                            ColumnDef::new(SampleOperations::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SampleOperations::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sample_operations_sample_id")
                        .table(SampleOperations::Table)
                        .col(SampleOperations::SampleId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SmvCalculations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SmvCalculations::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(SmvCalculations::SampleId).string().not_null())
                        .col(ColumnDef::new(SmvCalculations::BuyerName).string().not_null())
                        .col(ColumnDef::new(SmvCalculations::StyleName).string().not_null())
                        .col(ColumnDef::new(SmvCalculations::Category).string().null())
                        .col(ColumnDef::new(SmvCalculations::Gauge).string().null())
                        .col(ColumnDef::new(SmvCalculations::TotalSmv).double().not_null())
                        .col(ColumnDef::new(SmvCalculations::Operations).text().null())
                        .col(
                            ColumnDef::new(SmvCalculations::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SmvCalculations::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_smv_calculations_sample_id")
                        .table(SmvCalculations::Table)
                        .col(SmvCalculations::SampleId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SmvCalculations::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(SampleOperations::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Samples::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Samples {
        Table,
        Id,
        SampleId,
        BuyerId,
        StyleId,
        SampleType,
        SampleDescription,
        Item,
        Gauge,
        WorksheetRcvDate,
        YarnRcvDate,
        RequiredDate,
        Color,
        AssignedDesigner,
        RequiredSampleQuantity,
        Round,
        Notes,
        SubmitStatus,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum SampleOperations {
        Table,
        Id,
        SampleId,
        OperationType,
        NameOfOperation,
        NumberOfOperation,
        Size,
        Duration,
        TotalDuration,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum SmvCalculations {
        Table,
        Id,
        SampleId,
        BuyerName,
        StyleName,
        Category,
        Gauge,
        TotalSmv,
        Operations,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000004_create_planning_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000004_create_planning_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // sample_id is intentionally non-unique: set styles produce one
            // TNA row per piece
            manager
                .create_table(
                    Table::create()
                        .table(SampleTna::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SampleTna::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(SampleTna::SampleId).string().not_null())
                        .col(ColumnDef::new(SampleTna::BuyerName).string().not_null())
                        .col(ColumnDef::new(SampleTna::StyleName).string().not_null())
                        .col(ColumnDef::new(SampleTna::SampleType).string().not_null())
                        .col(ColumnDef::new(SampleTna::SampleDescription).text().null())
                        .col(ColumnDef::new(SampleTna::Item).string().null())
                        .col(ColumnDef::new(SampleTna::Gauge).string().null())
                        .col(ColumnDef::new(SampleTna::WorksheetRcvDate).string().null())
                        .col(ColumnDef::new(SampleTna::YarnRcvDate).string().null())
                        .col(ColumnDef::new(SampleTna::RequiredDate).string().null())
                        .col(ColumnDef::new(SampleTna::Color).string().null())
                        .col(ColumnDef::new(SampleTna::PieceName).string().null())
                        .col(ColumnDef::new(SampleTna::Notes).text().null())
                        .col(
                            ColumnDef::new(SampleTna::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SampleTna::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sample_tna_sample_id")
                        .table(SampleTna::Table)
                        .col(SampleTna::SampleId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SamplePlan::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SamplePlan::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(SamplePlan::SampleId).string().not_null())
                        .col(ColumnDef::new(SamplePlan::BuyerName).string().not_null())
                        .col(ColumnDef::new(SamplePlan::StyleName).string().not_null())
                        .col(ColumnDef::new(SamplePlan::SampleType).string().not_null())
                        .col(ColumnDef::new(SamplePlan::SampleDescription).text().null())
                        .col(ColumnDef::new(SamplePlan::Item).string().null())
                        .col(ColumnDef::new(SamplePlan::Gauge).string().null())
                        .col(ColumnDef::new(SamplePlan::WorksheetRcvDate).string().null())
                        .col(ColumnDef::new(SamplePlan::YarnRcvDate).string().null())
                        .col(ColumnDef::new(SamplePlan::RequiredDate).string().null())
                        .col(ColumnDef::new(SamplePlan::Color).string().null())
                        .col(ColumnDef::new(SamplePlan::PieceName).string().null())
                        .col(ColumnDef::new(SamplePlan::AssignedDesigner).string().null())
                        .col(
                            ColumnDef::new(SamplePlan::RequiredSampleQuantity)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SamplePlan::Round)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .col(ColumnDef::new(SamplePlan::Notes).text().null())
                        .col(ColumnDef::new(SamplePlan::SubmitStatus).string().null())
                        .col(
                            ColumnDef::new(SamplePlan::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SamplePlan::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sample_plan_sample_id")
                        .table(SamplePlan::Table)
                        .col(SamplePlan::SampleId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SamplePlan::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(SampleTna::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SampleTna {
        Table,
        Id,
        SampleId,
        BuyerName,
        StyleName,
        SampleType,
        SampleDescription,
        Item,
        Gauge,
        WorksheetRcvDate,
        YarnRcvDate,
        RequiredDate,
        Color,
        PieceName,
        Notes,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum SamplePlan {
        Table,
        Id,
        SampleId,
        BuyerName,
        StyleName,
        SampleType,
        SampleDescription,
        Item,
        Gauge,
        WorksheetRcvDate,
        YarnRcvDate,
        RequiredDate,
        Color,
        PieceName,
        AssignedDesigner,
        RequiredSampleQuantity,
        Round,
        Notes,
        SubmitStatus,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000005_create_master_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000005_create_master_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(OperationTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OperationTypes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(OperationTypes::OperationType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OperationTypes::OperationName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OperationTypes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OperationTypes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(GarmentColors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GarmentColors::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(GarmentColors::ColorName)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(GarmentColors::ColorCode).string().not_null())
                        .col(ColumnDef::new(GarmentColors::ColorRef).string().null())
                        .col(ColumnDef::new(GarmentColors::Category).string().null())
                        .col(
                            ColumnDef::new(GarmentColors::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(GarmentColors::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GarmentColors::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(GarmentSizes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GarmentSizes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(GarmentSizes::SizeValue)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(GarmentSizes::SizeLabel).string().null())
                        .col(ColumnDef::new(GarmentSizes::SizeCategory).string().null())
                        .col(
                            ColumnDef::new(GarmentSizes::SortOrder)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(GarmentSizes::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(GarmentSizes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GarmentSizes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OperationMaster::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OperationMaster::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(OperationMaster::OperationCode)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(OperationMaster::OperationName)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(OperationMaster::OperationType).string().null())
                        .col(ColumnDef::new(OperationMaster::MachineType).string().null())
                        .col(
                            ColumnDef::new(OperationMaster::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(OperationMaster::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OperationMaster::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SmvSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SmvSettings::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SmvSettings::SettingKey)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(SmvSettings::SettingValue).double().not_null())
                        .col(ColumnDef::new(SmvSettings::Gauge).string().null())
                        .col(ColumnDef::new(SmvSettings::Remarks).text().null())
                        .col(
                            ColumnDef::new(SmvSettings::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SmvSettings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SmvSettings::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(OperationMaster::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(GarmentSizes::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(GarmentColors::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(OperationTypes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum OperationTypes {
        Table,
        Id,
        OperationType,
        OperationName,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum GarmentColors {
        Table,
        Id,
        ColorName,
        ColorCode,
        ColorRef,
        Category,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum GarmentSizes {
        Table,
        Id,
        SizeValue,
        SizeLabel,
        SizeCategory,
        SortOrder,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum OperationMaster {
        Table,
        Id,
        OperationCode,
        OperationName,
        OperationType,
        MachineType,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum SmvSettings {
        Table,
        Id,
        SettingKey,
        SettingValue,
        Gauge,
        Remarks,
        CreatedAt,
        UpdatedAt,
    }
}
