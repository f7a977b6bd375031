//! [`ActorEntity`] implementation for the Product domain type.

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};

use super::actions::{ProductAction, ProductActionResult};

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        Ok(Self::new(id, params.name, params.price, params.stock))
    }

    /// Admin upsert: any subset of name, price and stock.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ProductAction, _ctx: &()) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::DeductStock(quantity) => {
                self.stock -= i64::from(quantity);
                Ok(ProductActionResult::DeductStock(self.stock))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deduct_stock_can_go_negative() {
        let mut product = Product::new("prod_1".into(), "Merino Wool Polo", 2499.0, 3);
        let result = product
            .handle_action(ProductAction::DeductStock(5), &())
            .await
            .unwrap();
        match result {
            ProductActionResult::DeductStock(remaining) => assert_eq!(remaining, -2),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(product.stock, -2);
    }
}
