use crate::style::{ButtonColor, ButtonSize, ButtonVariant, StyleDimensions};

/// Anything that carries a full set of [`StyleDimensions`].
pub(crate) trait StyleConfigurable: Sized {
    fn dimensions_mut(&mut self) -> &mut StyleDimensions;
}

pub trait Sizeable: Sized {
    fn size(self, value: ButtonSize) -> Self;
}

impl<T> Sizeable for T
where
    T: StyleConfigurable,
{
    fn size(mut self, value: ButtonSize) -> Self {
        self.dimensions_mut().size = value;
        self
    }
}

pub trait Variantable: Sized {
    fn variant(self, value: ButtonVariant) -> Self;
}

impl<T> Variantable for T
where
    T: StyleConfigurable,
{
    fn variant(mut self, value: ButtonVariant) -> Self {
        self.dimensions_mut().variant = value;
        self
    }
}

pub trait Colorable: Sized {
    fn color(self, value: ButtonColor) -> Self;
}

impl<T> Colorable for T
where
    T: StyleConfigurable,
{
    fn color(mut self, value: ButtonColor) -> Self {
        self.dimensions_mut().color = value;
        self
    }
}

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

#[macro_export]
macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(self, value: bool) -> Self {
                <$type>::disabled(self, value)
            }
        }
    };
}

impl StyleConfigurable for StyleDimensions {
    fn dimensions_mut(&mut self) -> &mut StyleDimensions {
        self
    }
}

crate::impl_disableable!(StyleDimensions);

#[cfg(test)]
mod tests {
    use super::*;

    fn configure<T>(target: T) -> T
    where
        T: Sizeable + Variantable + Colorable + Disableable,
    {
        let target = Sizeable::size(target, ButtonSize::Small);
        let target = Variantable::variant(target, ButtonVariant::Ghost);
        let target = Colorable::color(target, ButtonColor::Positive);
        Disableable::disabled(target, true)
    }

    #[test]
    fn contracts_write_through_to_dimensions() {
        let dimensions = configure(StyleDimensions::new());
        assert_eq!(dimensions.size, ButtonSize::Small);
        assert_eq!(dimensions.variant, ButtonVariant::Ghost);
        assert_eq!(dimensions.color, ButtonColor::Positive);
        assert!(dimensions.disabled);
        assert!(!dimensions.loading);
    }
}
