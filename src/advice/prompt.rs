//! Prompt construction for shopping advice.

use crate::profile::CustomerProfile;

/// Placeholder used when the user did not ask anything specific.
pub const NO_QUESTION: &str = "없음";

/// Build the single prompt sent to the generative model.
///
/// Deterministic: the same profile and question always produce the same text.
/// A missing or blank question is rendered as [`NO_QUESTION`].
pub fn build_prompt(profile: &CustomerProfile, question: Option<&str>) -> String {
    let question = question
        .filter(|q| !q.trim().is_empty())
        .unwrap_or(NO_QUESTION);

    format!(
        "당신은 고객 맞춤형 쇼핑 조언을 제공하는 전문가입니다.\n\
         아래 고객 정보를 바탕으로 실행 가능한 조언을 3가지 제안해주세요.\n\
         각 조언은 \"- \"로 시작하고, 마크다운(**, # 등)을 사용하지 말아주세요.\n\
         문장은 간결하고 친절하게 작성해주세요.\n\
         \n\
         고객 정보:\n\
         - 나이: {age}세\n\
         - 평균 구매액: ${amount}\n\
         - 구독 여부: {subscription}\n\
         - 구매 빈도: {frequency}\n\
         \n\
         추가 요청: {question}",
        age = profile.age,
        amount = profile.purchase_amount,
        subscription = profile.subscription_status.label(),
        frequency = profile.purchase_frequency,
    )
}
