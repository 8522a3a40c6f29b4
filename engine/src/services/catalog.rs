//! Product catalog service: CRUD, search/sort/pagination, CSV import/export

use shared::models::{NewProduct, Product, ProductPatch, ProductSortKey};
use shared::types::{Pagination, PaginationMeta, SortDirection};
use shared::validation::{codes_collide, validate_required};
use uuid::Uuid;

use crate::csv;
use crate::error::{AppError, AppResult};
use crate::store::Store;

const STORAGE_KEY: &str = "products_v1";

/// Columns of the product CSV export, in order
pub const CSV_HEADERS: [&str; 6] = [
    "Sr",
    "Product Code",
    "Product Name",
    "Description",
    "Color",
    "Quantity",
];

/// Catalog service owning the in-memory product table and its store key
pub struct CatalogService {
    store: Store,
    products: Vec<Product>,
    page_size: u32,
}

impl CatalogService {
    /// Load the catalog from the store, renumbering display orders
    pub fn load(store: Store, page_size: u32) -> Self {
        let products = store.load(STORAGE_KEY, Vec::new());
        let mut service = Self {
            store,
            products,
            page_size,
        };
        service.renumber();
        service
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn get(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Exact (case-sensitive) code lookup, used to resolve purchases
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Create a product
    ///
    /// Fails when the trimmed code or name is blank, or when the trimmed
    /// code case-insensitively collides with an existing product's code.
    pub fn create(&mut self, input: NewProduct) -> AppResult<Product> {
        let code = input.code.trim().to_string();
        let name = input.name.trim().to_string();

        validate_required(&code)
            .map_err(|_| AppError::validation("code", "Product code is required"))?;
        validate_required(&name)
            .map_err(|_| AppError::validation("name", "Product name is required"))?;
        if self.code_collides(&code, None) {
            return Err(AppError::DuplicateCode(code));
        }

        let product = Product {
            id: Uuid::new_v4(),
            sr_no: self.products.len() as u32 + 1,
            code,
            name,
            description: input.description,
            color: input.color,
            quantity: input.quantity,
        };
        self.products.push(product.clone());
        self.save();

        tracing::debug!("Created product {}", product.code);
        Ok(product)
    }

    /// Apply a partial update
    ///
    /// A blank submitted value keeps the existing value; code collisions
    /// against other products are rejected the same way as on create.
    pub fn update(&mut self, id: Uuid, patch: ProductPatch) -> AppResult<Product> {
        let existing = self
            .get(id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let code = keep_if_blank(patch.code.as_deref(), &existing.code);
        let name = keep_if_blank(patch.name.as_deref(), &existing.name);
        let description = keep_if_blank(patch.description.as_deref(), &existing.description);
        let color = keep_if_blank(patch.color.as_deref(), &existing.color);
        let quantity = patch.quantity.unwrap_or(existing.quantity);

        if self.code_collides(&code, Some(id)) {
            return Err(AppError::DuplicateCode(code));
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;
        product.code = code;
        product.name = name;
        product.description = description;
        product.color = color;
        product.quantity = quantity;

        let updated = product.clone();
        self.save();
        Ok(updated)
    }

    /// Delete a product and renumber display orders densely
    pub fn delete(&mut self, id: Uuid) -> AppResult<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(AppError::NotFound("Product".to_string()));
        }
        self.renumber();
        self.save();
        Ok(())
    }

    /// Delete every product whose id appears in `ids`, returning the count
    pub fn bulk_delete(&mut self, ids: &[Uuid]) -> usize {
        let before = self.products.len();
        self.products.retain(|p| !ids.contains(&p.id));
        let removed = before - self.products.len();
        if removed > 0 {
            self.renumber();
            self.save();
        }
        removed
    }

    /// Case-insensitive substring search across code, name, description, color
    pub fn search(&self, term: &str) -> Vec<Product> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.clone();
        }
        self.products
            .iter()
            .filter(|p| {
                [&p.code, &p.name, &p.description, &p.color]
                    .iter()
                    .any(|v| v.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Add `qty` units of stock to a product, returning the new quantity
    pub fn increase_stock(&mut self, id: Uuid, qty: u32) -> AppResult<u32> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;
        product.quantity = product.quantity.saturating_add(qty);
        let new_quantity = product.quantity;
        self.save();
        Ok(new_quantity)
    }

    /// Remove up to `qty` units of stock, flooring at zero
    pub fn decrease_stock(&mut self, id: Uuid, qty: u32) -> AppResult<u32> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;
        product.quantity = product.quantity.saturating_sub(qty);
        let new_quantity = product.quantity;
        self.save();
        Ok(new_quantity)
    }

    /// Export the full catalog as quoted CSV with a header row
    pub fn export_csv(&self) -> String {
        let mut rows: Vec<Vec<String>> =
            vec![CSV_HEADERS.iter().map(|h| h.to_string()).collect()];
        rows.extend(self.products.iter().map(|p| {
            vec![
                p.sr_no.to_string(),
                p.code.clone(),
                p.name.clone(),
                p.description.clone(),
                p.color.clone(),
                p.quantity.to_string(),
            ]
        }));
        csv::encode(&rows)
    }

    /// Import products from CSV text, returning the number of rows added
    ///
    /// Tolerates a missing header row. Columns are read positionally with
    /// index-shifted fallbacks for files that drop the leading Sr column.
    pub fn import_csv(&mut self, text: &str) -> usize {
        let rows = csv::decode(text);
        let start = if csv::has_product_header(&rows) { 1 } else { 0 };

        let mut imported = 0;
        for (i, row) in rows.iter().enumerate().skip(start) {
            if row.is_empty() {
                continue;
            }
            let code = pick(row, 1)
                .or_else(|| pick(row, 0))
                .unwrap_or_else(|| format!("IMP-{}", i));
            let name = pick(row, 2)
                .or_else(|| pick(row, 1))
                .unwrap_or_else(|| format!("Imported {}", i));
            let product = Product {
                id: Uuid::new_v4(),
                sr_no: 0, // rewritten by renumber below
                code,
                name,
                description: pick(row, 3).unwrap_or_default(),
                color: pick(row, 4).unwrap_or_default(),
                quantity: pick(row, 5)
                    .and_then(|q| q.parse().ok())
                    .unwrap_or(0),
            };
            self.products.push(product);
            imported += 1;
        }

        if imported > 0 {
            self.renumber();
            self.save();
            tracing::info!("Imported {} products from CSV", imported);
        }
        imported
    }

    fn code_collides(&self, code: &str, exclude: Option<Uuid>) -> bool {
        self.products
            .iter()
            .any(|p| Some(p.id) != exclude && codes_collide(&p.code, code))
    }

    fn renumber(&mut self) {
        for (i, product) in self.products.iter_mut().enumerate() {
            product.sr_no = i as u32 + 1;
        }
    }

    fn save(&self) {
        self.store.save(STORAGE_KEY, &self.products);
    }
}

fn pick(row: &[String], index: usize) -> Option<String> {
    row.get(index).cloned()
}

fn keep_if_blank(submitted: Option<&str>, existing: &str) -> String {
    match submitted {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => existing.to_string(),
    }
}

/// Order a product list view by one column
///
/// Lowercase string comparison; a missing key value always compares greater
/// than any present value, so absent keys sort to the end regardless of
/// direction.
pub fn sort_products(list: &mut [Product], key: ProductSortKey, dir: SortDirection) {
    list.sort_by(|a, b| compare_keys(Some(a.sort_value(key)), Some(b.sort_value(key)), dir));
}

/// Comparator behind [`sort_products`], shared by any sortable list view
pub fn compare_keys(
    a: Option<String>,
    b: Option<String>,
    dir: SortDirection,
) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let a = a.to_lowercase();
            let b = b.to_lowercase();
            match dir {
                SortDirection::Asc => a.cmp(&b),
                SortDirection::Desc => b.cmp(&a),
            }
        }
    }
}

/// Clamp a 1-based page index against the filtered row count and slice out
/// that page
pub fn page(list: &[Product], paging: Pagination) -> (&[Product], PaginationMeta) {
    let page_size = paging.per_page;
    let total_items = list.len() as u64;
    let total_pages = ((total_items as f64 / page_size as f64).ceil() as u32).max(1);
    let page = paging.page.clamp(1, total_pages);

    let start = ((page - 1) * page_size) as usize;
    let end = (start + page_size as usize).min(list.len());
    let items = if start < list.len() {
        &list[start..end]
    } else {
        &[]
    };

    (
        items,
        PaginationMeta {
            page,
            per_page: page_size,
            total_items,
            total_pages,
        },
    )
}
