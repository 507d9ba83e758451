use crate::services::catalog::{Catalog, Category, Product};
use serde::Serialize;

/// Заготовка ответа: текст, подсказки и категории товаров для карточек
#[derive(Debug, Clone, Copy)]
pub struct ReplyTemplate {
    pub text: &'static str,
    pub suggestions: &'static [&'static str],
    pub categories: &'static [Category],
}

impl ReplyTemplate {
    /// Подставляет товары из каталога. Товары не копируются, в ответ попадают ссылки
    pub fn render(&self, catalog: &Catalog, rule: Option<&'static str>) -> Reply {
        let products = if self.categories.is_empty() {
            Vec::new()
        } else {
            catalog.by_categories(self.categories)
        };

        Reply {
            rule,
            text: self.text.to_string(),
            suggestions: self.suggestions.iter().map(|s| s.to_string()).collect(),
            products,
        }
    }
}

/// Готовый ответ ассистента
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    /// Имя сработавшего правила, `None` для ответа по умолчанию и приветствия
    pub rule: Option<&'static str>,
    pub text: String,
    pub suggestions: Vec<String>,
    pub products: Vec<&'static Product>,
}

impl Reply {
    #[cfg(test)]
    pub fn has_products(&self) -> bool {
        !self.products.is_empty()
    }
}
