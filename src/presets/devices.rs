//! Apple device registry for splash-screen generation.
//!
//! Portrait pixel dimensions and scale factors per device class, keyed by
//! marketing name.

use crate::error::{AssetsError, Result};
use crate::types::{AppleDeviceSize, AppleSplashScreens};

/// Device name, portrait width, portrait height, scale factor.
const DEVICES: &[(&str, u32, u32, u32)] = &[
    ("iPad Pro 12.9\"", 2048, 2732, 2),
    ("iPad Pro 11\"", 1668, 2388, 2),
    ("iPad Pro 10.5\"", 1668, 2388, 2),
    ("iPad Pro 9.7\"", 1536, 2048, 2),
    ("iPad mini 7.9\"", 1536, 2048, 2),
    ("iPad Air 10.5\"", 1668, 2224, 2),
    ("iPad Air 9.7\"", 1536, 2048, 2),
    ("iPad 10.2\"", 1620, 2160, 2),
    ("iPad 9.7\"", 1536, 2048, 2),
    ("iPhone 14 Pro Max", 1290, 2796, 3),
    ("iPhone 14 Pro", 1179, 2556, 3),
    ("iPhone 14 Plus", 1284, 2778, 3),
    ("iPhone 14", 1170, 2532, 3),
    ("iPhone 13 Pro Max", 1284, 2778, 3),
    ("iPhone 13 Pro", 1170, 2532, 3),
    ("iPhone 13", 1170, 2532, 3),
    ("iPhone 13 mini", 1125, 2436, 3),
    ("iPhone 12 Pro Max", 1284, 2778, 3),
    ("iPhone 12 Pro", 1170, 2532, 3),
    ("iPhone 12", 1170, 2532, 3),
    ("iPhone 12 mini", 1125, 2436, 3),
    ("iPhone 11 Pro Max", 1242, 2688, 3),
    ("iPhone 11 Pro", 1125, 2436, 3),
    ("iPhone 11", 828, 1792, 2),
    ("iPhone XS Max", 1242, 2688, 3),
    ("iPhone XS", 1125, 2436, 3),
    ("iPhone XR", 828, 1792, 2),
    ("iPhone X", 1125, 2436, 3),
    ("iPhone 8 Plus", 1242, 2208, 3),
    ("iPhone 8", 750, 1334, 2),
    ("iPhone 7 Plus", 1242, 2208, 3),
    ("iPhone 7", 750, 1334, 2),
    ("iPhone 6s Plus", 1242, 2208, 3),
    ("iPhone 6s", 750, 1334, 2),
    ("iPhone 6 Plus", 1242, 2208, 3),
    ("iPhone 6", 750, 1334, 2),
    ("iPhone SE 4.7\"", 750, 1334, 2),
    ("iPhone SE 4\"", 640, 1136, 2),
    ("iPod touch 5th generation and later", 640, 1136, 2),
];

/// Collection of known Apple devices.
pub struct AppleDevices;

impl AppleDevices {
    /// Look up a device by marketing name.
    pub fn get(name: &str) -> Option<AppleDeviceSize> {
        DEVICES
            .iter()
            .find(|(device, _, _, _)| *device == name)
            .map(|&(_, width, height, scale_factor)| {
                AppleDeviceSize::new(width, height, scale_factor)
            })
    }

    /// Names of all known devices, in registry order.
    pub fn names() -> Vec<&'static str> {
        DEVICES.iter().map(|(name, _, _, _)| *name).collect()
    }

    /// All known device sizes, in registry order.
    pub fn all() -> Vec<AppleDeviceSize> {
        DEVICES
            .iter()
            .map(|&(_, width, height, scale_factor)| {
                AppleDeviceSize::new(width, height, scale_factor)
            })
            .collect()
    }
}

impl AppleSplashScreens {
    /// Build a splash-screen spec for the named devices, group options left
    /// at their defaults (override via struct update syntax).
    pub fn for_devices(devices: &[&str]) -> Result<Self> {
        let mut sizes = Vec::with_capacity(devices.len());
        for name in devices {
            let size = AppleDevices::get(name).ok_or_else(|| AssetsError::UnknownDevice {
                name: (*name).to_string(),
                help: Some("See AppleDevices::names() for the known device names".to_string()),
            })?;
            sizes.push(size);
        }
        Ok(Self {
            sizes,
            ..Default::default()
        })
    }

    /// Build a splash-screen spec covering every known device.
    pub fn for_all_devices() -> Self {
        Self {
            sizes: AppleDevices::all(),
            ..Default::default()
        }
    }
}
