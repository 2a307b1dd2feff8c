mod button;
pub(crate) mod utils;

#[cfg(test)]
mod test_button_behavior;

pub use button::Button;
