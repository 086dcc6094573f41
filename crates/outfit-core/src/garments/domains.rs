// ABOUTME: Enumerated garment values for each of the ten outfit slots
// ABOUTME: Generated enums with stable snake_case wire names and a designated none value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{GarmentDomain, GarmentSlot};

/// Declare a garment domain enum bound to its slot
///
/// Each variant carries its wire name once; serde, `Display`, and
/// `GarmentDomain::as_str` all read from it.
macro_rules! garment_domain {
    (
        $(#[$meta:meta])*
        $name:ident for $slot:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl GarmentDomain for $name {
            const SLOT: GarmentSlot = GarmentSlot::$slot;
            const NONE: Self = Self::None;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

garment_domain! {
    /// Under-helmet head covering
    HeadGear for Head {
        /// Bare head under the helmet
        None => "none",
        /// Thin cotton or synthetic cap
        CyclingCap => "cycling_cap",
        /// Ear-covering headband
        Headband => "headband",
        /// Fleece-lined skull cap
        ThermalCap => "thermal_cap",
        /// Full head and neck balaclava
        Balaclava => "balaclava",
    }
}

garment_domain! {
    /// Next-to-skin torso layer
    BaseLayer for TorsoBase {
        /// No base layer
        None => "none",
        /// Open mesh for hot days
        MeshBase => "mesh_base",
        /// Short-sleeve base layer
        ShortSleeveBase => "short_sleeve_base",
        /// Long-sleeve base layer
        LongSleeveBase => "long_sleeve_base",
        /// Merino or brushed thermal base layer
        ThermalBase => "thermal_base",
    }
}

garment_domain! {
    /// Jersey or insulating mid layer
    MidLayer for TorsoMid {
        /// No mid layer
        None => "none",
        /// Short-sleeve jersey
        ShortSleeveJersey => "short_sleeve_jersey",
        /// Long-sleeve jersey
        LongSleeveJersey => "long_sleeve_jersey",
        /// Brushed thermal jersey
        ThermalJersey => "thermal_jersey",
        /// Insulated mid layer for low-intensity cold rides
        InsulatedMidlayer => "insulated_midlayer",
    }
}

garment_domain! {
    /// Outer torso shell
    OuterLayer for TorsoOuter {
        /// No outer layer
        None => "none",
        /// Sleeveless windproof vest
        WindVest => "wind_vest",
        /// Packable wind jacket
        WindJacket => "wind_jacket",
        /// Softshell jacket
        SoftshellJacket => "softshell_jacket",
        /// Insulated winter jacket
        InsulatedJacket => "insulated_jacket",
        /// Waterproof rain shell
        RainShell => "rain_shell",
    }
}

garment_domain! {
    /// Arm coverage
    ArmCoverage for Arms {
        /// Bare arms
        None => "none",
        /// Lycra arm warmers
        ArmWarmers => "arm_warmers",
        /// Fleece-lined arm warmers
        ThermalArmWarmers => "thermal_arm_warmers",
    }
}

garment_domain! {
    /// Gloves and mitts
    HandWear for Hands {
        /// No gloves
        None => "none",
        /// Short-finger mitts
        FingerlessGloves => "fingerless_gloves",
        /// Light full-finger gloves
        FullFingerGloves => "full_finger_gloves",
        /// Thermal full-finger gloves
        ThermalGloves => "thermal_gloves",
        /// Insulated winter gloves
        WinterGloves => "winter_gloves",
        /// Three-finger lobster mitts
        LobsterMitts => "lobster_mitts",
    }
}

garment_domain! {
    /// Leg coverage
    LegWear for Legs {
        /// No leg garment
        None => "none",
        /// Bib shorts
        BibShorts => "bib_shorts",
        /// Bib shorts with knee warmers
        KneeWarmers => "knee_warmers",
        /// Bib shorts with full leg warmers
        LegWarmers => "leg_warmers",
        /// Bib tights
        BibTights => "bib_tights",
        /// Fleece-lined bib tights
        ThermalBibTights => "thermal_bib_tights",
    }
}

garment_domain! {
    /// Socks
    SockType for FeetSocks {
        /// No socks
        None => "none",
        /// Thin summer cycling socks
        CyclingSocks => "cycling_socks",
        /// Merino wool socks
        WoolSocks => "wool_socks",
        /// Heavy thermal socks
        ThermalSocks => "thermal_socks",
    }
}

garment_domain! {
    /// Overshoes and toe covers
    ShoeCover for FeetCovers {
        /// No covers
        None => "none",
        /// Toe covers
        ToeCovers => "toe_covers",
        /// Neoprene overshoes
        NeopreneOvershoes => "neoprene_overshoes",
        /// Insulated winter overshoes
        WinterOvershoes => "winter_overshoes",
        /// Waterproof overshoes
        WaterproofOvershoes => "waterproof_overshoes",
    }
}

garment_domain! {
    /// Neck covering
    NeckWear for Neck {
        /// Bare neck
        None => "none",
        /// Light neck gaiter
        NeckGaiter => "neck_gaiter",
        /// Fleece neck gaiter
        ThermalNeckGaiter => "thermal_neck_gaiter",
    }
}
