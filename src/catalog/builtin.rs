//! Default dishes used when no catalog file is configured.

use serde_json::Value;

use super::{FoodCatalog, RawFoodRecord};

fn dish(name: &str, energy: f64, protein: f64, carbohydrate: f64, fat: f64, image: &str) -> RawFoodRecord {
    RawFoodRecord {
        name: Some(Value::from(name)),
        energy: Some(Value::from(energy)),
        protein: Some(Value::from(protein)),
        fat: Some(Value::from(fat)),
        carbohydrate: Some(Value::from(carbohydrate)),
        fiber: None,
        image: Some(Value::from(image)),
    }
}

pub fn builtin_records() -> Vec<RawFoodRecord> {
    vec![
        dish("Bun Bo Hue", 600.0, 25.0, 68.0, 22.0, "https://example.com/bunbo.jpg"),
        dish("Pho Ga", 450.0, 28.0, 55.0, 12.0, "https://example.com/phoga.jpg"),
        dish("Banh Mi", 520.0, 22.0, 48.0, 26.0, "https://example.com/banhmi.jpg"),
        dish("Com Tam", 680.0, 32.0, 72.0, 28.0, "https://example.com/comtam.jpg"),
        dish("Goi Cuon", 180.0, 12.0, 24.0, 4.0, "https://example.com/goicuon.jpg"),
        dish("Banh Xeo", 580.0, 18.0, 62.0, 32.0, "https://example.com/banhxeo.jpg"),
        dish("Ca Kho To", 420.0, 28.0, 15.0, 25.0, "https://example.com/cakho.jpg"),
        dish("Bun Cha", 560.0, 24.0, 65.0, 22.0, "https://example.com/buncha.jpg"),
        dish("Che", 350.0, 4.0, 60.0, 10.0, "https://example.com/che.jpg"),
        dish("Burger", 550.0, 25.0, 45.0, 30.0, "https://example.com/burger.jpg"),
        dish("Pizza", 280.0, 12.0, 32.0, 10.0, "https://example.com/pizza.jpg"),
        dish("Caesar Salad", 350.0, 15.0, 12.0, 28.0, "https://example.com/salad.jpg"),
        dish("Sushi Roll", 300.0, 10.0, 50.0, 6.0, "https://example.com/sushi.jpg"),
        dish("Pad Thai", 650.0, 20.0, 85.0, 25.0, "https://example.com/padthai.jpg"),
    ]
}

pub fn builtin_catalog() -> FoodCatalog {
    FoodCatalog::from_records(builtin_records())
}
