use serde::Serialize;
use std::fmt;

/// Категория товара в витрине
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rings,
    Necklaces,
    Earrings,
    Bracelets,
}

impl Category {
    #[cfg(test)]
    pub const ALL: [Category; 4] = [
        Category::Rings,
        Category::Necklaces,
        Category::Earrings,
        Category::Bracelets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rings => "rings",
            Category::Necklaces => "necklaces",
            Category::Earrings => "earrings",
            Category::Bracelets => "bracelets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Карточка товара. Данные статические, поэтому все поля `&'static str`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub category: Category,
}

/// Ассортимент магазина
pub const LUXE_PRODUCTS: &[Product] = &[
    Product {
        id: "1",
        name: "Solitaire Diamond Ring",
        price: "$5,999",
        description: "1.5 carat round brilliant cut diamond, platinum setting",
        category: Category::Rings,
    },
    Product {
        id: "2",
        name: "Diamond Eternity Band",
        price: "$3,499",
        description: "18K white gold band with 2 carats total weight",
        category: Category::Rings,
    },
    Product {
        id: "3",
        name: "Diamond Tennis Necklace",
        price: "$8,999",
        description: "10 carat total weight, 18K white gold",
        category: Category::Necklaces,
    },
    Product {
        id: "4",
        name: "Diamond Stud Earrings",
        price: "$4,299",
        description: "2 carat total weight, round brilliant cut",
        category: Category::Earrings,
    },
    Product {
        id: "5",
        name: "Halo Diamond Engagement Ring",
        price: "$7,499",
        description: "2 carat center stone with halo, 18K rose gold",
        category: Category::Rings,
    },
    Product {
        id: "6",
        name: "Diamond Tennis Bracelet",
        price: "$6,799",
        description: "5 carat total weight, classic design",
        category: Category::Bracelets,
    },
    Product {
        id: "7",
        name: "Princess Cut Diamond Ring",
        price: "$6,499",
        description: "1.8 carat princess cut, platinum setting",
        category: Category::Rings,
    },
    Product {
        id: "8",
        name: "Diamond Pendant Necklace",
        price: "$3,999",
        description: "1 carat solitaire pendant, 18K white gold chain",
        category: Category::Necklaces,
    },
];

/// Оставляет товары нужной категории, сохраняя исходный порядок.
/// Работает и с уже отфильтрованным списком, поэтому повторный вызов ничего не меняет.
pub fn filter_by_category<'a, I>(products: I, category: Category) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| p.category == category)
        .collect()
}

/// Каталог только для чтения: вставки, изменения и удаления не предусмотрены
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(LUXE_PRODUCTS)
    }
}

impl Catalog {
    pub fn new(products: &'static [Product]) -> Self {
        Self { products }
    }

    #[cfg(test)]
    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, category: Category) -> Vec<&'static Product> {
        filter_by_category(self.products, category)
    }

    /// Товары любой из перечисленных категорий в порядке каталога, без дублей
    pub fn by_categories(&self, categories: &[Category]) -> Vec<&'static Product> {
        self.products
            .iter()
            .filter(|p| categories.contains(&p.category))
            .collect()
    }

    #[cfg(test)]
    pub fn contains(&self, product: &Product) -> bool {
        self.products.iter().any(|p| p == product)
    }
}
