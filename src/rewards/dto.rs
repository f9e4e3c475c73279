use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: i32,
}

/// Request body for the direct-redeem path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    pub reward_cost: i32,
}

#[derive(Debug, Serialize)]
pub struct RedeemResponse {
    pub message: String,
}

/// Request body for issuing a coupon.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponRequest {
    pub reward_name: String,
    pub reward_cost: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redeem_request_uses_camel_case() {
        let req: RedeemRequest =
            serde_json::from_str(r#"{"rewardCost":30}"#).expect("valid redeem body");
        assert_eq!(req.reward_cost, 30);
    }

    #[test]
    fn create_coupon_request_uses_camel_case() {
        let req: CreateCouponRequest =
            serde_json::from_str(r#"{"rewardName":"Free grooming","rewardCost":30}"#)
                .expect("valid coupon body");
        assert_eq!(req.reward_name, "Free grooming");
        assert_eq!(req.reward_cost, 30);
    }
}
