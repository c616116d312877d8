//! Prompt templates for evidence relevance analysis.
//!
//! The evaluation rubric lives entirely in the prompt text: category
//! definitions, URL handling, confidence bands and quality bands are
//! instructions for the model, not logic this crate computes.

/// System instruction sent with every analysis request.
pub const SYSTEM_PROMPT: &str = "You are an expert fact-checker with web search capabilities. \
When you encounter URLs in evidence, search and analyze their content. \
In any case, analyse the text of the evidence itself. \
Respond only with valid JSON.";

/// Render the analysis prompt for one piece of evidence.
///
/// The template is fixed; only the statement, the evidence and the
/// human-readable claimed side vary between calls.
pub fn relevance_prompt(statement: &str, evidence: &str, claimed_side: bool) -> String {
    let side = if claimed_side { "SUPPORT" } else { "OPPOSE" };
    format!(
        r#"
You are an expert fact-checker and evidence analyst with web search capabilities. Your task is to determine whether the provided evidence actually supports, opposes, is unrelated to, or is not evidence for the given statement.

STATEMENT: "{statement}"

EVIDENCE: "{evidence}"

CLAIMED POSITION: The evidence claims to {side} the statement.

Please analyze the evidence, reason about it and determine:

1. ACTUAL RELATIONSHIP: Does the evidence actually:
   - SUPPORT the statement (provides facts/data that confirm it)
   - OPPOSE the statement (provides facts/data that contradict it)
   - UNRELATED (content is about a completely different topic and has no connection to the statement)
   - NOT_EVIDENCE (personal opinion without supporting materials, unsupported claims, or statements without evidence)

2. CONFIDENCE: How confident are you in this assessment? (from 0 to 1)

3. QUALITY SCORE: If the relationship is SUPPORT or OPPOSE, rate the overall quality of the evidence (from 0 to 1) based on:
   - CREDIBILITY: How reliable and trustworthy is the source/information?
   - USEFULNESS: How relevant and applicable is the evidence to the statement?
   - HELPFULNESS: How valuable is this evidence for understanding the topic?

   Consider factors like:
   - Source authority and expertise
   - Recency and relevance of information
   - Strength of the supporting data/facts
   - Clarity and specificity of the evidence
   - Whether it addresses core aspects of the statement

   Set to null if relationship is UNRELATED or NOT_EVIDENCE.

4. REASONING: Briefly explain your analysis.

Instructions:
- Evidence can be only text, or text with supporting material in form of links/URLs etc.
- If the evidence contains links/URLs, do search and analyze the actual content of those links.
- CONSIDER BOTH the text of the evidence and linked content; if at least one of them supports or opposes the statement, then the evidence is relevant. If they contradict each other, choose the one in which the evidence is more confident. For example, if the evidence claims that the statement is false but the linked content is not related, it is still relevant evidence claiming that the statement is false. Likewise, if the text is not relevant but the linked content is, then the evidence is relevant.
- DO CHECK THE LINKED CONTENT even if the text is clearly relevant! Do not make a conclusion only based on the text or the website type, even if you can.
- DO NOT ONLY ASSUME what the linked content is about; actually visit the page and assess. If it is not clear from the page, take the best guess with lower confidence.
- DO NOT consider the credibility of the source for relationship determination, just the content of the evidence! However, DO consider credibility for the quality score.
- If evidence is related to the statement topic and provides valuable information, but you cannot make a clear conclusion about support/oppose, then choose between SUPPORT or OPPOSE with very low confidence (<0.5).

UNRELATED:
- Use this only if the evidence is about a completely different topic with no connection to the statement at all (e.g., statement about vaccines, evidence about cooking recipes).

NOT_EVIDENCE:
- Use this for personal opinions without supporting materials, unsupported claims, or vague statements. Examples:
  * "I believe the statement is false"
  * "It has been shown" (without citing what or where)
  * "It is a fact" (without providing the actual facts)
  * "Everyone knows that..."
  * Pure personal anecdotes without broader relevance
- DO NOT use NOT_EVIDENCE if the evidence points to resources or mentions them; then it is evidence, even if it is not providing specific details. For example: "it has been shown that this is true, see the article from New York Times on the 1st of January 2021." - this is SUPPORT evidence.
- Personal experience that can bring value to the discussion is still considered evidence, not NOT_EVIDENCE.

HOW TO GIVE CONFIDENCE:
- The confidence shows how confident you are in the category. If you choose:
UNRELATED: give how confident you are the evidence is not related to the statement.
NOT_EVIDENCE: give how confident you are that the evidence is not providing any evidence for the statement.
SUPPORT or OPPOSE: give how confident you are that the evidence supports or opposes the statement based on the sentiment.
- Give high confidence 0.9+ if the relationship is clearly stated in the evidence.
- Give high confidence 0.7-0.8 if you are fairly certain about the relationship and the opinion is stated in the evidence. If you have to assume the opinion, this is not high confidence.
- Give medium confidence 0.3-0.6 if you are not certain about the relationship. For example, if the evidence is about a study, but you cannot understand the study and can only assume what it is about. If you believe something only because the linked website typically has certain information, this is not certain enough!
- Give very low confidence 0.0-0.3 if you are not certain at all about the relationship.
- "it is reasonable to assume" is low confidence!
- If the evidence is only a link, give maximum 0.7 confidence.

HOW TO GIVE QUALITY SCORE:
- Only provide quality score for SUPPORT or OPPOSE relationships
- 0.8-1.0: High quality - Expert sources, peer-reviewed studies, official statistics, clear data with proper methodology
- 0.6-0.8: Good quality - Reputable news sources, well-documented reports, clear logical arguments with some supporting data
- 0.4-0.6: Moderate quality - General sources, some supporting information, reasonable arguments but limited depth
- 0.2-0.4: Low quality - Weak sources, limited supporting information, unclear or poorly presented arguments
- 0.0-0.2: Very low quality - Unreliable sources, no supporting data, misleading or biased presentation

Respond in this exact JSON format:
{{
    "reasoning": "Brief explanation of your analysis",
    "predicted_relationship": "SUPPORT|OPPOSE|UNRELATED|NOT_EVIDENCE",
    "confidence": 0-1,
    "quality_score": 0-1 or null
}}
"#
    )
}
