//! 产品存储
//!
//! 进程内的产品集合。所有操作都在同一把锁内完成，id 的计算和按下标删除
//! 不会与其他写操作交错。

use parking_lot::Mutex;

use super::model::Product;
use super::validation::ProductInput;
use crate::core::error::ApiError;

pub struct ProductStore {
    products: Mutex<Vec<Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    /// 启动时的示例数据
    pub fn seeded() -> Self {
        Self::with_products(vec![
            Product::new(1, "Laptop Lenovo", 3500.0),
            Product::new(2, "Mouse Logitech", 120.0),
        ])
    }

    pub fn len(&self) -> usize {
        self.products.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.lock().is_empty()
    }

    /// 按存储顺序返回全部产品
    pub fn list(&self) -> Vec<Product> {
        self.products.lock().clone()
    }

    pub fn get(&self, id: u64) -> Result<Product, ApiError> {
        self.products
            .lock()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    /// 新 id 为当前最大 id + 1，集合为空时为 1
    pub fn create(&self, input: ProductInput) -> Product {
        let mut products = self.products.lock();
        let id = products.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        let product = Product::new(id, input.name(), input.price());
        products.push(product.clone());
        product
    }

    /// 整体替换名称和价格，id 不变
    pub fn update(&self, id: u64, input: ProductInput) -> Result<Product, ApiError> {
        let mut products = self.products.lock();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::NotFound)?;

        *product = Product::new(id, input.name(), input.price());
        Ok(product.clone())
    }

    pub fn delete(&self, id: u64) -> Result<Product, ApiError> {
        let mut products = self.products.lock();
        let idx = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ApiError::NotFound)?;

        Ok(products.remove(idx))
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
