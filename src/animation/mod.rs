mod animatable;
mod animator;
mod timing;

pub use animatable::Animatable;
pub use animator::{Animator, FloatAnimator};
pub use timing::TimingFunction;
