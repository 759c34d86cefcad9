//! Target Registry
//!
//! The fixed vocabulary of property names the switch understands. A target
//! that is not listed here is rejected before any bytes are sent.

use std::fmt;
use std::str::FromStr;

use crate::error::VrroomError;

/// Declares the `Target` enum together with its wire-name table.
macro_rules! targets {
    ($( $(#[$meta:meta])* $variant:ident => $name:literal, )+) => {
        /// A gettable/settable property of the switch, by protocol name
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Target {
            $( $(#[$meta])* $variant, )+
        }

        impl Target {
            /// Every target, in declaration order
            pub const ALL: &'static [Target] = &[ $( Target::$variant, )+ ];

            /// The identifier used on the wire
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Target::$variant => $name, )+
                }
            }

            fn lookup(name: &str) -> Option<Target> {
                match name {
                    $( $name => Some(Target::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

targets! {
    // -------------------------------------------------------------------------
    // Routing & Modes
    // -------------------------------------------------------------------------
    /// Operation mode (splitter/matrix variants)
    OperationMode => "opmode",
    /// Selected inputs for both outputs at once
    SelectedInputs => "insel",
    /// Selected input for output TX0
    SelectedInputTx0 => "inseltx0",
    /// Selected input for output TX1
    SelectedInputTx1 => "inseltx1",
    /// Automatic input switching
    AutoSwitching => "autosw",
    HtpcModeRx0 => "htpcmode0",
    HtpcModeRx1 => "htpcmode1",
    HtpcModeRx2 => "htpcmode2",
    HtpcModeRx3 => "htpcmode3",
    ScaleMode => "scalemode",
    Tx0Plus5 => "tx0plus5",
    Tx1Plus5 => "tx1plus5",
    Hdcp => "hdcp",
    UnmuteDelay => "unmutedelay",

    // -------------------------------------------------------------------------
    // EDID
    // -------------------------------------------------------------------------
    EdidMode => "edidmode",
    EdidTableRx0 => "edidtableinrx0",
    EdidTableRx1 => "edidtableinrx1",
    EdidTableRx2 => "edidtableinrx2",
    EdidTableRx3 => "edidtableinrx3",
    EdidAudioFlags => "edidaudioflags",
    EdidDolbyVisionFlag => "ediddvflag",
    EdidDolbyVisionMode => "ediddvmode",
    EdidHdrFlag => "edidhdrflag",
    EdidHdrMode => "edidhdrmode",
    EdidVrrFlag => "edidvrrflag",
    EdidAllmFlag => "edidallmflag",
    EdidFrlFlag => "edidfrlflag",
    EdidFrlMode => "edidfrlmode",
    EdidYuvFlag => "edidyuvflag",
    Edid3dFlag => "edid3dflag",
    EdidPcmFlag => "edidpcmflag",
    EdidPcmChannelMode => "edidpcmchmode",
    EdidTrueHdFlag => "edidtruehdflag",
    EdidDolbyDigitalFlag => "edidddflag",
    EdidDolbyDigitalPlusFlag => "edidddplusflag",
    EdidDtsFlag => "ediddtsflag",
    EdidDtsHdFlag => "ediddtshdflag",
    EdidOneBitFlag => "edidonebitflag",

    // -------------------------------------------------------------------------
    // Audio & eARC
    // -------------------------------------------------------------------------
    EarcForce => "earcforce",
    EarcUnmuteDelay => "earcunmutedelay",
    ArcForce => "arcforce",
    AudioMode => "audiomode",
    MuteTx0Audio => "mutetx0audio",
    MuteTx1Audio => "mutetx1audio",
    AnalogVolume => "analogvolume",
    AnalogBass => "analogbass",
    AnalogTreble => "analogtreble",

    // -------------------------------------------------------------------------
    // HDR
    // -------------------------------------------------------------------------
    HdrCustom => "hdrcustom",
    HdrDisable => "hdrdisable",
    Hdr10Plus => "hdr10plus",

    // -------------------------------------------------------------------------
    // CEC
    // -------------------------------------------------------------------------
    Cec => "cec",
    CecLogicalAddress => "cecla",
    CecRx0 => "cec0en",
    CecRx1 => "cec1en",
    CecRx2 => "cec2en",
    CecRx3 => "cec3en",
    CecTx0 => "cectx0en",
    CecTx1 => "cectx1en",

    // -------------------------------------------------------------------------
    // Front Panel
    // -------------------------------------------------------------------------
    Oled => "oled",
    OledPage => "oledpage",
    OledFade => "oledfade",
    Relay => "relay",
    IrEnable => "irenable",

    // -------------------------------------------------------------------------
    // Network
    // -------------------------------------------------------------------------
    IpAddress => "ipaddr",
    IpNetworkMask => "ipmask",
    IpGateway => "ipgw",
    Dhcp => "dhcp",
    IpInterrupt => "ipinterrupt",
    TcpPort => "tcpport",
    MacAddress => "mac",

    // -------------------------------------------------------------------------
    // Device Info
    // -------------------------------------------------------------------------
    Version => "ver",
    Serial => "serial",
    Temperature => "temp",
    FanSpeed => "fanspeed",

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------
    /// Restore settings and/or EDID tables
    FactoryReset => "factoryreset",
    /// Send a hotplug event to the sources
    Hotplug => "hotplug",
    Reboot => "reboot",
}

impl Target {
    /// Whether `name` is exactly one of the registered targets.
    ///
    /// Case-sensitive, no normalization.
    pub fn is_valid(name: &str) -> bool {
        Self::lookup(name).is_some()
    }

    /// Convert a wire name into a registered target
    pub fn parse(name: &str) -> Result<Target, VrroomError> {
        Self::lookup(name).ok_or_else(|| VrroomError::InvalidTarget(name.to_string()))
    }
}

impl FromStr for Target {
    type Err = VrroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::parse(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
