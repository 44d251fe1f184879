//! Fadeable surfaces - anything with a single opacity value.

use bevy::color::Alpha;
use bevy::prelude::*;

/// A visual element exposing one scalar opacity in `[0, 1]`.
pub trait FadeableSurface {
    fn opacity(&self) -> f32;
    fn set_opacity(&mut self, opacity: f32);
}

/// A bare value, used for detached timers that drive nothing visible.
impl FadeableSurface for f32 {
    fn opacity(&self) -> f32 {
        *self
    }

    fn set_opacity(&mut self, opacity: f32) {
        *self = opacity;
    }
}

impl FadeableSurface for Color {
    fn opacity(&self) -> f32 {
        self.alpha()
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.set_alpha(opacity);
    }
}

impl FadeableSurface for BackgroundColor {
    fn opacity(&self) -> f32 {
        self.0.opacity()
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.0.set_opacity(opacity);
    }
}

impl FadeableSurface for TextColor {
    fn opacity(&self) -> f32 {
        self.0.opacity()
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.0.set_opacity(opacity);
    }
}

impl FadeableSurface for ImageNode {
    fn opacity(&self) -> f32 {
        self.color.opacity()
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.color.set_opacity(opacity);
    }
}

impl<S: FadeableSurface + ?Sized> FadeableSurface for &mut S {
    fn opacity(&self) -> f32 {
        (**self).opacity()
    }

    fn set_opacity(&mut self, opacity: f32) {
        (**self).set_opacity(opacity);
    }
}

/// Presents `1 - opacity` of the wrapped surface.
///
/// A black overlay wrapped in `Inverted` clears while the sequence fades in
/// and covers the screen again while it fades out.
#[derive(Debug)]
pub struct Inverted<S>(pub S);

impl<S: FadeableSurface> FadeableSurface for Inverted<S> {
    fn opacity(&self) -> f32 {
        1.0 - self.0.opacity()
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.0.set_opacity(1.0 - opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_color_keeps_rgb_when_fading() {
        let mut text = TextColor(Color::srgba(0.8, 0.2, 0.2, 1.0));
        text.set_opacity(0.25);

        assert!((text.opacity() - 0.25).abs() < 1e-6);
        let Color::Srgba(srgba) = text.0 else {
            panic!("color space changed");
        };
        assert!((srgba.red - 0.8).abs() < 1e-6);
        assert!((srgba.green - 0.2).abs() < 1e-6);
    }

    #[test]
    fn inverted_overlay_reads_and_writes_complement() {
        let mut overlay = BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 1.0));
        {
            let mut inverted = Inverted(&mut overlay);
            assert!(inverted.opacity().abs() < 1e-6);
            inverted.set_opacity(0.75);
        }
        assert!((overlay.opacity() - 0.25).abs() < 1e-6);
    }
}
