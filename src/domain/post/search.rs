// src/domain/post/search.rs
use crate::domain::errors::DomainError;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Listing order. Defaults to newest first (id descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl PostSort {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for PostSort {
    fn default() -> Self {
        Self::new(SortField::Id, SortDirection::Desc)
    }
}

impl FromStr for PostSort {
    type Err = DomainError;

    /// Parses `field[,direction]`, for example `id,desc` or `title`.
    /// The direction defaults to ascending when omitted.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split(',').map(str::trim);
        let field = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            Some("id") => SortField::Id,
            Some("title") => SortField::Title,
            _ => {
                return Err(DomainError::invalid_field(
                    "sort",
                    format!("unsupported sort field in \"{raw}\""),
                ));
            }
        };
        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(_) => {
                return Err(DomainError::invalid_field(
                    "sort",
                    format!("unsupported sort direction in \"{raw}\""),
                ));
            }
        };
        if parts.next().is_some() {
            return Err(DomainError::invalid_field(
                "sort",
                format!("malformed sort \"{raw}\""),
            ));
        }
        Ok(Self::new(field, direction))
    }
}

impl fmt::Display for PostSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{},{direction}", self.field.column())
    }
}

/// Paging request as the caller phrased it. Nothing here is trusted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSearch {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<PostSort>,
}

impl PostSearch {
    pub fn page(page: i64) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_sort(mut self, sort: PostSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn normalize(&self) -> PageRequest {
        let page = self.page.filter(|page| *page > 0).unwrap_or(1);
        let limit = match self.size {
            Some(size) if size > 0 => u32::try_from(size.min(i64::from(MAX_PAGE_SIZE)))
                .unwrap_or(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        let skipped_pages = u64::try_from(page - 1).unwrap_or(0);
        PageRequest {
            offset: skipped_pages.saturating_mul(u64::from(limit)),
            limit,
            sort: self.sort.unwrap_or_default(),
        }
    }
}

/// Concrete window handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u32,
    pub sort: PostSort,
}
