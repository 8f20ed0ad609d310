use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MembershipTier {
    Trial,
    Permanent,
}

impl MembershipTier {
    pub fn all() -> [MembershipTier; 2] {
        [MembershipTier::Trial, MembershipTier::Permanent]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "trial" => Some(Self::Trial),
            "permanent" => Some(Self::Permanent),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            MembershipTier::Trial => "trial",
            MembershipTier::Permanent => "permanent",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MembershipTier::Trial => "Trial Membership",
            MembershipTier::Permanent => "Permanent Membership",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            MembershipTier::Trial => "Access to up to 6 gyms for a limited period.",
            MembershipTier::Permanent => "Unlimited access to all gyms and premium features.",
        }
    }

    pub fn details(&self) -> &'static str {
        match self {
            MembershipTier::Trial => {
                "This membership allows you to try out up to 6 gyms for a limited period. \
                 After this, you will need to upgrade to a Permanent Membership to continue \
                 visiting your choice of gym."
            }
            MembershipTier::Permanent => {
                "Enjoy unlimited access to the gym of your choice and exclusive premium features. \
                 This membership gives you the flexibility to visit your gym at any time."
            }
        }
    }

    /// Gym limit; `None` means unlimited.
    pub fn gym_limit(&self) -> Option<u32> {
        match self {
            MembershipTier::Trial => Some(6),
            MembershipTier::Permanent => None,
        }
    }

    /// Price in rupees.
    pub fn price(&self) -> u32 {
        match self {
            MembershipTier::Trial => 399,
            MembershipTier::Permanent => 899,
        }
    }

    /// Original (slashed) price in rupees.
    pub fn original_price(&self) -> u32 {
        match self {
            MembershipTier::Trial => 799,
            MembershipTier::Permanent => 1299,
        }
    }
}
