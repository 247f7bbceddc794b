use crate::logic::price::accepts_price_char;
use crate::state::{FilterAction, FilterCriteria, PriceField};

impl FilterCriteria {
    /// What: Pure reducer for filter state.
    ///
    /// Inputs:
    /// - `self`: Current criteria (consumed)
    /// - `action`: Change requested by a control or the CLI
    ///
    /// Output:
    /// - New criteria with exactly the targeted field updated.
    ///
    /// Details:
    /// - Typed price characters go through [`accepts_price_char`]; rejected
    ///   characters leave the criteria unchanged.
    /// - `SetMinPrice`/`SetMaxPrice` store any text; the pipeline ignores
    ///   values it cannot parse.
    #[must_use]
    pub fn apply(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetSearch(text) => self.search_text = text,
            FilterAction::PushSearchChar(ch) => self.search_text.push(ch),
            FilterAction::PopSearchChar => {
                self.search_text.pop();
            }
            FilterAction::SetCategory(category) => self.category = category,
            FilterAction::CycleCategory => self.category = self.category.next(),
            FilterAction::SetMinPrice(text) => self.min_price = text,
            FilterAction::SetMaxPrice(text) => self.max_price = text,
            FilterAction::PushPriceChar(field, ch) => {
                let target = self.price_mut(field);
                if accepts_price_char(target, ch) {
                    target.push(ch);
                }
            }
            FilterAction::PopPriceChar(field) => {
                self.price_mut(field).pop();
            }
            FilterAction::SetSort(order) => self.sort_order = order,
            FilterAction::CycleSort => self.sort_order = self.sort_order.next(),
        }
        self
    }

    /// Raw text of one price input.
    pub fn price(&self, field: PriceField) -> &str {
        match field {
            PriceField::Min => &self.min_price,
            PriceField::Max => &self.max_price,
        }
    }

    /// Mutable raw text of one price input.
    fn price_mut(&mut self, field: PriceField) -> &mut String {
        match field {
            PriceField::Min => &mut self.min_price,
            PriceField::Max => &mut self.max_price,
        }
    }
}
