//! Avito Feed Schema
//!
//! The fixed part of the contract: the set of semantic fields recognized in
//! the listing sheet, the verbatim Cyrillic column titles that bind them, the
//! sheet layout constants and the feed-level constants.

/// Feed format version carried on the root element.
pub(crate) const FORMAT_VERSION: &str = "3";

/// Target marketplace identifier carried on the root element.
pub(crate) const TARGET: &str = "Avito.ru";

/// Constant category emitted for every record, regardless of the source cell.
pub(crate) const CATEGORY: &str = "Готовый бизнес";

/// Default franchise fee when the source cell is empty.
pub(crate) const DEFAULT_FEE: &str = "0";

/// Default royalty ("Нет" = none) when the source cell is empty.
pub(crate) const DEFAULT_ROYALTY: &str = "Нет";

/// Delimiter between photo URLs inside a single cell.
pub(crate) const PHOTO_DELIMITER: char = '|';

/// Row index holding the column titles. Row 0 is the category banner.
pub(crate) const HEADER_ROW: usize = 1;

/// First data row. Rows 2-3 are reserved service rows and never emitted.
pub(crate) const DATA_START_ROW: usize = 4;

/// Minimum row count for a structurally valid listing sheet.
pub(crate) const MIN_ROWS: usize = 5;

/// Suggested file name for the produced feed, for delivery collaborators.
pub const FEED_FILE_NAME: &str = "avito_feed.xml";

/// Semantic fields of a listing record.
///
/// One variant per known column of the listing sheet. The declaration order
/// is not the output order; emission order is fixed in the feed writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Id,
    AdId,
    ManagerName,
    ContactPhone,
    Address,
    Title,
    Description,
    Price,
    Photos,
    ContactMethod,
    Category,
    BusinessType,
    GoodsSubType,
    FranchiseSubType,
    FranchiseFee,
    FranchiseRoyalty,
    RoyaltyType,
    FixedRoyalty,
    PercentRoyalty,
    Payback,
    Support,
    SupportType,
    TargetAudience,
    Status,
    ContactEmail,
    DateEnd,
    VideoUrl,
    CompanyName,
}

impl Field {
    /// Number of known fields.
    pub const COUNT: usize = 28;

    /// Every known field, in declaration order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Id,
        Field::AdId,
        Field::ManagerName,
        Field::ContactPhone,
        Field::Address,
        Field::Title,
        Field::Description,
        Field::Price,
        Field::Photos,
        Field::ContactMethod,
        Field::Category,
        Field::BusinessType,
        Field::GoodsSubType,
        Field::FranchiseSubType,
        Field::FranchiseFee,
        Field::FranchiseRoyalty,
        Field::RoyaltyType,
        Field::FixedRoyalty,
        Field::PercentRoyalty,
        Field::Payback,
        Field::Support,
        Field::SupportType,
        Field::TargetAudience,
        Field::Status,
        Field::ContactEmail,
        Field::DateEnd,
        Field::VideoUrl,
        Field::CompanyName,
    ];

    /// The exact column title that binds this field.
    ///
    /// Matching against the header row is case-sensitive and exact; the
    /// titles below must be reproduced verbatim. `Category` and `Status`
    /// are bound like every other field but never read during emission
    /// (the category is emitted as a constant instead).
    pub fn title(self) -> &'static str {
        match self {
            Field::Id => "Уникальный идентификатор объявления",
            Field::AdId => "Номер объявления на Авито",
            Field::ManagerName => "Контактное лицо",
            Field::ContactPhone => "Номер телефона",
            Field::Address => "Адрес",
            Field::Title => "Название объявления",
            Field::Description => "Описание объявления",
            Field::Price => "Цена",
            Field::Photos => "Ссылки на фото",
            Field::ContactMethod => "Способ связи",
            Field::Category => "Категория",
            Field::BusinessType => "Вид бизнеса",
            Field::GoodsSubType => "Вид франшизы",
            Field::FranchiseSubType => "Тип франшизы",
            Field::FranchiseFee => "Паушальный взнос",
            Field::FranchiseRoyalty => "Роялти",
            Field::RoyaltyType => "Тип роялти",
            Field::FixedRoyalty => "Фиксированное роялти",
            Field::PercentRoyalty => "Процентное роялти",
            Field::Payback => "Окупаемость франшизы",
            Field::Support => "Сопровождение",
            Field::SupportType => "Тип сопровождения",
            Field::TargetAudience => "Целевая аудитория",
            Field::Status => "AvitoStatus",
            Field::ContactEmail => "Почта",
            Field::DateEnd => "AvitoDateEnd",
            Field::VideoUrl => "Ссылка на видео",
            Field::CompanyName => "Название компании",
        }
    }
}
