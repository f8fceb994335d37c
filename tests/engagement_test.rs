use profile_lens::{dom, extract_comments, extract_reactors, Options, Queryable, ScopeUnion};

fn reactor(href: &str, name: &str, icon: &str) -> String {
    format!(
        r#"<li class="social-details-reactors-tab-body-list-item">
             <a class="link-without-hover-state" href="{href}">
               <div class="artdeco-entity-lockup__title"><span aria-hidden="true">{name}</span></div>
               <div class="artdeco-entity-lockup__caption">Engineer at Acme</div>
               <div class="artdeco-entity-lockup__metadata">Lisbon, Portugal</div>
             </a>
             {icon}
           </li>"#
    )
}

fn reactor_modal(rows: &[String]) -> String {
    format!(
        r#"<div class="social-details-reactors-tab-body"><ul>{}</ul></div>"#,
        rows.concat()
    )
}

#[test]
fn duplicate_reactor_rows_collapse_to_one_profile() {
    let html = reactor_modal(&[
        reactor("/in/ana/", "Ana Silva", r#"<img class="reactions-icon" alt="like">"#),
        reactor("/in/ana/", "Ana Silva", r#"<img class="reactions-icon" alt="like">"#),
    ]);
    let doc = dom::parse(&html);
    let reactors = extract_reactors(&doc, &Options::default());

    assert_eq!(reactors.len(), 1);
    assert_eq!(reactors[0].profile_url, "https://www.linkedin.com/in/ana");
    assert_eq!(reactors[0].location.as_deref(), Some("Lisbon, Portugal"));
}

#[test]
fn nameless_reactor_is_kept_but_nameless_commenter_is_not() {
    // Photo-only anchor: no name tier and no anchor text
    let reactors_html = reactor_modal(&[r#"<li class="social-details-reactors-tab-body-list-item">
          <a class="link-without-hover-state" href="/in/anon/"><img src="ghost.png"></a>
          <li-icon aria-label="reacted with insightful"></li-icon>
        </li>"#
        .to_string()]);
    let doc = dom::parse(&reactors_html);
    let reactors = extract_reactors(&doc, &Options::default());
    assert_eq!(reactors.len(), 1);
    assert!(reactors[0].full_name.is_none());
    assert_eq!(reactors[0].reaction_label(), Some("insightful"));

    let comments_html = r#"<div class="comments-comments-list">
        <article class="comments-comment-entity">
          <a class="comments-comment-meta__image-link" href="/in/anon/"><img alt=""></a>
          <span class="comments-comment-item__main-content">Interesting</span>
        </article>
      </div>"#;
    let doc = dom::parse(comments_html);
    assert!(extract_comments(&doc, &Options::default()).is_empty());
}

#[test]
fn reaction_icon_type_is_normalized() {
    let html = reactor_modal(&[reactor(
        "/in/bo/",
        "Bo Chen",
        r#"<span data-test-reactions-icon-type="PRAISE"></span>"#,
    )]);
    let doc = dom::parse(&html);
    let reactors = extract_reactors(&doc, &Options::default());
    assert_eq!(reactors[0].reaction_label(), Some("celebrate"));
}

#[test]
fn limit_caps_unique_profiles() {
    let rows: Vec<String> = (0..10)
        .map(|i| reactor(&format!("/in/member-{}/", i % 5), "Member", ""))
        .collect();
    let doc = dom::parse(&reactor_modal(&rows));

    let all = extract_reactors(&doc, &Options::default());
    assert_eq!(all.len(), 5);

    let options = Options {
        reactor_limit: Some(3),
        ..Options::default()
    };
    let capped = extract_reactors(&doc, &options);
    assert_eq!(capped.len(), 3);
    assert_eq!(capped[2].profile_url, "https://www.linkedin.com/in/member-2");
}

#[test]
fn origin_override_resolves_relative_links() {
    let html = reactor_modal(&[reactor("/in/ana/", "Ana", "")]);
    let doc = dom::parse(&html);
    let options = Options::with_origin("https://intranet.example.org").unwrap();
    let reactors = extract_reactors(&doc, &options);
    assert_eq!(reactors[0].profile_url, "https://intranet.example.org/in/ana");
}

#[test]
fn commenters_carry_comment_text() {
    let html = r#"<div class="comments-comments-list">
        <article class="comments-comment-entity">
          <a class="comments-comment-meta__description-container" href="https://www.linkedin.com/in/ana/?trk=c">
            <span class="comments-comment-meta__description-title">Ana Silva • 1st</span>
            <div class="comments-comment-meta__description-subtitle">Data Scientist</div>
          </a>
          <span class="comments-comment-item__main-content">Great write-up!</span>
        </article>
        <article class="comments-comment-entity">
          <a class="comments-comment-meta__description-container" href="/in/ana/">
            <span class="comments-comment-meta__description-title">Ana Silva</span>
          </a>
          <span class="comments-comment-item__main-content">Second comment</span>
        </article>
      </div>"#;
    let doc = dom::parse(html);
    let options = Options {
        comment_limit: Some(10),
        ..Options::default()
    };
    let comments = extract_comments(&doc, &options);

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].full_name.as_deref(), Some("Ana Silva"));
    assert_eq!(comments[0].headline.as_deref(), Some("Data Scientist"));
    assert_eq!(comments[0].comment_text(), Some("Great write-up!"));
    assert_eq!(comments[0].reaction_label(), None);
}

#[test]
fn scope_union_reads_several_containers() {
    let html = r#"
        <div id="first"><ul>
          <li class="social-details-reactors-tab-body-list-item"><a href="/in/a/">A</a></li>
        </ul></div>
        <div id="second"><ul>
          <li class="social-details-reactors-tab-body-list-item"><a href="/in/b/">B</a></li>
          <li class="social-details-reactors-tab-body-list-item"><a href="/in/a/">A again</a></li>
        </ul></div>
        <div id="ignored"><ul>
          <li class="social-details-reactors-tab-body-list-item"><a href="/in/c/">C</a></li>
        </ul></div>"#;
    let doc = dom::parse(html);
    let first = doc.select("#first");
    let second = doc.select("#second");
    let scopes: Vec<&dyn Queryable> = vec![&first, &second];
    let union = ScopeUnion::new(scopes);

    let reactors = extract_reactors(&union, &Options::default());
    let names: Vec<_> = reactors.iter().map(|r| r.full_name.as_deref()).collect();
    assert_eq!(names, vec![Some("A"), Some("B")]);
}

#[test]
fn engagement_serializes_with_kind_tag() {
    let html = reactor_modal(&[reactor("/in/ana/", "Ana", r#"<img class="reactions-icon" alt="love">"#)]);
    let doc = dom::parse(&html);
    let reactors = extract_reactors(&doc, &Options::default());
    let json = serde_json::to_value(&reactors[0]).unwrap();

    assert_eq!(json["kind"], "reaction");
    assert_eq!(json["reactionLabel"], "love");
    assert_eq!(json["profileUrl"], "https://www.linkedin.com/in/ana");
    assert_eq!(json["fullName"], "Ana");
}
