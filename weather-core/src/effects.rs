//! Decorative effects keyed to the reported condition.
//!
//! The core only decides *which* effects apply; drawing them is left to an
//! [`EffectRenderer`] supplied by the front end.

use serde::{Deserialize, Serialize};

use crate::condition::ConditionCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Effect {
    Rain,
    Lightning,
    Snow,
    /// `partial` dims the sun behind clouds.
    Sun { partial: bool },
    Stars,
    Fog,
}

pub fn effects_for(category: ConditionCategory, is_night: bool) -> Vec<Effect> {
    match category {
        ConditionCategory::Rain | ConditionCategory::Drizzle => vec![Effect::Rain],
        ConditionCategory::Thunderstorm => vec![Effect::Rain, Effect::Lightning],
        ConditionCategory::Snow => vec![Effect::Snow],
        ConditionCategory::Clear if is_night => vec![Effect::Stars],
        ConditionCategory::Clear => vec![Effect::Sun { partial: false }],
        ConditionCategory::Clouds if is_night => Vec::new(),
        ConditionCategory::Clouds => vec![Effect::Sun { partial: true }],
        ConditionCategory::Mist => vec![Effect::Fog],
    }
}

/// Something that can draw effects, e.g. a terminal or a canvas.
pub trait EffectRenderer {
    /// Drops whatever the previous search drew.
    fn clear(&mut self);

    fn render(&mut self, effect: Effect);

    fn render_all(&mut self, effects: &[Effect]) {
        self.clear();
        for effect in effects {
            self.render(*effect);
        }
    }
}
