/// Types that configure an operation. Unlike [`std::default::Default`], this
/// trait is meant to describe the recommended configuration rather than a
/// neutral one.
pub trait ConfigType {
    fn default() -> Self;
}
