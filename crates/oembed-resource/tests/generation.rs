use insta::assert_snapshot;
use oembed_resource::{OembedError, OembedResource, ResourceKind, ResponseFormat, xml};

const XML_HEAD: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Every descriptive field plus a full thumbnail group and dimensions.
fn populated(kind: ResourceKind, title: &str, thumbnail: &str) -> OembedResource {
    let mut resource = OembedResource::new(kind);
    resource
        .set_title(title)
        .set_author_name("John Smith")
        .set_author_url("https://example.com/author/jsmith")
        .set_provider_name("An Example oEmbed Provider")
        .set_provider_url("https://example.com")
        .set_cache_age(86400)
        .set_thumbnail_url(thumbnail)
        .set_thumbnail_width(320)
        .set_thumbnail_height(160)
        .set_width(320)
        .set_height(160);
    resource
}

/// Walks a rendered document the way an XML 1.0 parser would for the flat shape
/// emitted here: one `<oembed>` root whose children hold text or CDATA.
fn assert_well_formed(document: &str) {
    let mut rest = document
        .strip_prefix(XML_HEAD)
        .and_then(|body| body.strip_suffix('\n'))
        .expect("declaration and trailing newline");
    let mut open: Vec<&str> = Vec::new();
    let mut roots = 0;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("<![CDATA[") {
            assert!(!open.is_empty(), "CDATA outside the root");
            let end = after.find("]]>").expect("unterminated CDATA");
            assert_chars(&after[..end]);
            rest = &after[end + 3..];
        } else if let Some(after) = rest.strip_prefix("</") {
            let end = after.find('>').expect("unterminated end tag");
            assert_eq!(open.pop(), Some(&after[..end]), "mismatched end tag");
            rest = &after[end + 1..];
        } else if let Some(after) = rest.strip_prefix('<') {
            let end = after.find('>').expect("unterminated start tag");
            let name = &after[..end];
            assert!(
                name.chars().all(|ch| ch.is_ascii_lowercase() || ch == '_'),
                "bad element name {name:?}"
            );
            if open.is_empty() {
                roots += 1;
                assert_eq!(name, xml::ROOT_ELEMENT);
            }
            open.push(name);
            rest = &after[end + 1..];
        } else {
            assert!(!open.is_empty(), "text outside the root");
            let end = rest.find('<').unwrap_or(rest.len());
            assert_text(&rest[..end]);
            rest = &rest[end..];
        }
    }
    assert_eq!(roots, 1, "exactly one root element");
    assert!(open.is_empty(), "unclosed elements {open:?}");
}

fn assert_chars(text: &str) {
    assert!(text.chars().all(xml::is_xml_char), "{text:?}");
    assert!(!text.contains('\r'), "raw CR in {text:?}");
}

fn assert_text(text: &str) {
    assert_chars(text);
    assert!(!text.contains("]]>"), "{text:?}");
    for (at, _) in text.match_indices('&') {
        let end = text[at..].find(';').expect("unterminated reference");
        let name = &text[at + 1..at + end];
        let known = matches!(name, "amp" | "lt" | "gt" | "quot" | "apos")
            || name
                .strip_prefix("#x")
                .is_some_and(|hex| u32::from_str_radix(hex, 16).is_ok());
        assert!(known, "bad reference &{name};");
    }
}

fn render_both(resource: &OembedResource) -> (String, String) {
    let json = resource.render(ResponseFormat::Json).expect("json renders");
    let xml = resource.render(ResponseFormat::Xml).expect("xml renders");
    (json, xml)
}

#[test]
fn photo_output_omits_html() {
    let mut photo = populated(
        ResourceKind::Photo,
        "My video",
        "https://example.com/photo/123/thumbnail.jpg",
    );
    photo
        .set_html("<iframe</iframe>")
        .set_url("https://example.com/photo/123.jpg");

    let (json, xml) = render_both(&photo);
    assert_snapshot!(json, @r#"{"type":"photo","version":"1.0","title":"My video","author_name":"John Smith","author_url":"https:\/\/example.com\/author\/jsmith","provider_name":"An Example oEmbed Provider","provider_url":"https:\/\/example.com","cache_age":86400,"thumbnail_url":"https:\/\/example.com\/photo\/123\/thumbnail.jpg","thumbnail_width":320,"thumbnail_height":160,"url":"https:\/\/example.com\/photo\/123.jpg","width":320,"height":160}"#);
    assert_eq!(
        xml,
        format!(
            "{XML_HEAD}<oembed><type>photo</type><version>1.0</version><title>My video</title><author_name>John Smith</author_name><author_url>https://example.com/author/jsmith</author_url><provider_name>An Example oEmbed Provider</provider_name><provider_url>https://example.com</provider_url><cache_age>86400</cache_age><thumbnail_url>https://example.com/photo/123/thumbnail.jpg</thumbnail_url><thumbnail_width>320</thumbnail_width><thumbnail_height>160</thumbnail_height><url>https://example.com/photo/123.jpg</url><width>320</width><height>160</height></oembed>\n"
        )
    );
}

#[test]
fn video_output_omits_url() {
    let mut video = populated(
        ResourceKind::Video,
        "My video",
        "https://example.com/video/123/thumbnail.jpg",
    );
    video
        .set_html(r#"<iframe src="https://example.com/video/123/embed"></iframe>"#)
        .set_url("https://any-url.com");

    let (json, xml) = render_both(&video);
    assert_snapshot!(json, @r#"{"type":"video","version":"1.0","title":"My video","author_name":"John Smith","author_url":"https:\/\/example.com\/author\/jsmith","provider_name":"An Example oEmbed Provider","provider_url":"https:\/\/example.com","cache_age":86400,"thumbnail_url":"https:\/\/example.com\/video\/123\/thumbnail.jpg","thumbnail_width":320,"thumbnail_height":160,"width":320,"height":160,"html":"<iframe src=\"https:\/\/example.com\/video\/123\/embed\"><\/iframe>"}"#);
    assert_eq!(
        xml,
        format!(
            "{XML_HEAD}<oembed><type>video</type><version>1.0</version><title>My video</title><author_name>John Smith</author_name><author_url>https://example.com/author/jsmith</author_url><provider_name>An Example oEmbed Provider</provider_name><provider_url>https://example.com</provider_url><cache_age>86400</cache_age><thumbnail_url>https://example.com/video/123/thumbnail.jpg</thumbnail_url><thumbnail_width>320</thumbnail_width><thumbnail_height>160</thumbnail_height><width>320</width><height>160</height><html><![CDATA[<iframe src=\"https://example.com/video/123/embed\"></iframe>]]></html></oembed>\n"
        )
    );
}

#[test]
fn link_output_omits_type_specific_fields() {
    let mut link = populated(
        ResourceKind::Link,
        "My link",
        "https://example.com/thumbnails/link-123.jpg",
    );
    link.set_html(r#"<iframe src="https://example.com/video/123/embed"></iframe>"#)
        .set_url("https://any-url.com");

    let (json, xml) = render_both(&link);
    assert_snapshot!(json, @r#"{"type":"link","version":"1.0","title":"My link","author_name":"John Smith","author_url":"https:\/\/example.com\/author\/jsmith","provider_name":"An Example oEmbed Provider","provider_url":"https:\/\/example.com","cache_age":86400,"thumbnail_url":"https:\/\/example.com\/thumbnails\/link-123.jpg","thumbnail_width":320,"thumbnail_height":160}"#);
    assert_eq!(
        xml,
        format!(
            "{XML_HEAD}<oembed><type>link</type><version>1.0</version><title>My link</title><author_name>John Smith</author_name><author_url>https://example.com/author/jsmith</author_url><provider_name>An Example oEmbed Provider</provider_name><provider_url>https://example.com</provider_url><cache_age>86400</cache_age><thumbnail_url>https://example.com/thumbnails/link-123.jpg</thumbnail_url><thumbnail_width>320</thumbnail_width><thumbnail_height>160</thumbnail_height></oembed>\n"
        )
    );
}

#[test]
fn rich_output_omits_url() {
    let mut rich = populated(
        ResourceKind::Rich,
        "My video",
        "https://example.com/rich/123/thumbnail.jpg",
    );
    rich.set_html(r#"<iframe src="https://example.com/rich/123/embed"></iframe>"#)
        .set_url("https://any-url.com");

    let (json, xml) = render_both(&rich);
    assert_snapshot!(json, @r#"{"type":"rich","version":"1.0","title":"My video","author_name":"John Smith","author_url":"https:\/\/example.com\/author\/jsmith","provider_name":"An Example oEmbed Provider","provider_url":"https:\/\/example.com","cache_age":86400,"thumbnail_url":"https:\/\/example.com\/rich\/123\/thumbnail.jpg","thumbnail_width":320,"thumbnail_height":160,"width":320,"height":160,"html":"<iframe src=\"https:\/\/example.com\/rich\/123\/embed\"><\/iframe>"}"#);
    assert_eq!(
        xml,
        format!(
            "{XML_HEAD}<oembed><type>rich</type><version>1.0</version><title>My video</title><author_name>John Smith</author_name><author_url>https://example.com/author/jsmith</author_url><provider_name>An Example oEmbed Provider</provider_name><provider_url>https://example.com</provider_url><cache_age>86400</cache_age><thumbnail_url>https://example.com/rich/123/thumbnail.jpg</thumbnail_url><thumbnail_width>320</thumbnail_width><thumbnail_height>160</thumbnail_height><width>320</width><height>160</height><html><![CDATA[<iframe src=\"https://example.com/rich/123/embed\"></iframe>]]></html></oembed>\n"
        )
    );
}

#[test]
fn minimal_video_in_both_formats() {
    let mut video = OembedResource::new(ResourceKind::Video);
    video
        .set_width(320)
        .set_height(160)
        .set_html("<iframe></iframe>");

    let (json, xml) = render_both(&video);
    assert_eq!(
        json,
        r#"{"type":"video","version":"1.0","width":320,"height":160,"html":"<iframe><\/iframe>"}"#
    );
    assert_eq!(
        xml,
        format!(
            "{XML_HEAD}<oembed><type>video</type><version>1.0</version><width>320</width><height>160</height><html><![CDATA[<iframe></iframe>]]></html></oembed>\n"
        )
    );
    assert!(!xml.contains("&lt;iframe"));
    assert_eq!(video.render_str("json").unwrap(), json);
    assert_eq!(
        video.render(ResponseFormat::default()).unwrap(),
        json,
        "json is the default format"
    );
}

#[test]
fn rendering_is_idempotent() {
    let mut rich = populated(
        ResourceKind::Rich,
        "Again",
        "https://example.com/rich/1/thumbnail.jpg",
    );
    rich.set_html("<div>embed</div>");

    for format in [ResponseFormat::Json, ResponseFormat::Xml] {
        let first = rich.render(format).unwrap();
        let second = rich.render(format).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn key_order_ignores_setter_order() {
    let mut forward = OembedResource::new(ResourceKind::Photo);
    forward
        .set_title("t")
        .set_cache_age(60)
        .set_url("https://example.com/p.jpg")
        .set_width(10)
        .set_height(20);

    let mut reversed = OembedResource::new(ResourceKind::Photo);
    reversed
        .set_height(20)
        .set_width(10)
        .set_url("https://example.com/p.jpg")
        .set_cache_age(60)
        .set_title("t");

    let payload = reversed.payload().unwrap();
    assert_eq!(
        payload.keys().collect::<Vec<_>>().join(","),
        "type,version,title,cache_age,url,width,height"
    );
    for format in [ResponseFormat::Json, ResponseFormat::Xml] {
        assert_eq!(
            forward.render(format).unwrap(),
            reversed.render(format).unwrap()
        );
    }
}

#[test]
fn empty_and_zero_optional_fields_are_omitted() {
    let mut link = OembedResource::new(ResourceKind::Link);
    link.set_title("").set_cache_age(0).set_author_name("0");

    let payload = link.payload().unwrap();
    assert_eq!(payload.get("title"), None);
    assert_eq!(payload.get("cache_age"), None);
    assert!(payload.get("author_name").is_some());
    assert_eq!(link.cache_control(), None);
}

#[test]
fn text_is_escaped_per_format() {
    let mut link = OembedResource::new(ResourceKind::Link);
    link.set_title("Tom & Jerry <Remastered>")
        .set_author_name("Zoë");

    let json = link.render(ResponseFormat::Json).unwrap();
    assert_eq!(
        json,
        r#"{"type":"link","version":"1.0","title":"Tom & Jerry <Remastered>","author_name":"Zo\u00eb"}"#
    );

    let xml = link.render(ResponseFormat::Xml).unwrap();
    assert!(xml.contains("<title>Tom &amp; Jerry &lt;Remastered&gt;</title>"));
    assert!(xml.contains("<author_name>Zoë</author_name>"));
}

#[test]
fn cache_control_follows_cache_age() {
    let mut link = OembedResource::new(ResourceKind::Link);
    assert_eq!(link.cache_control(), None);
    link.set_cache_age(86400);
    assert_eq!(link.cache_control().as_deref(), Some("max-age=86400"));
    assert_eq!(ResponseFormat::Xml.content_type(), "text/xml");
}

const HOSTILE: &str = "Tom & \"Jerry\" <'x'> ]]>\r\tend";

#[test]
fn xml_stays_well_formed_for_hostile_text() {
    for kind in ResourceKind::ALL {
        let mut resource = populated(kind, HOSTILE, "https://example.com/t.jpg?a=1&b=2");
        resource
            .set_url("https://example.com/p.jpg?q=]]>")
            .set_author_name("\"quoted\" & 'single'")
            .set_html("<script>a && b</script>]]><![CDATA[\r\n");

        let document = resource.render(ResponseFormat::Xml).unwrap();
        assert_well_formed(&document);
        assert!(document.contains("&quot;Jerry&quot; &lt;&#x27;x&#x27;&gt; ]]&gt;&#xD;\tend"));
    }
}

#[test]
fn control_characters_fail_xml_but_not_json() {
    let mut link = OembedResource::new(ResourceKind::Link);
    link.set_title("a\u{1}b\rc");

    let err = link.render(ResponseFormat::Xml).unwrap_err();
    assert!(matches!(err, OembedError::Encode(_)), "{err:?}");
    assert_eq!(
        err.to_string(),
        "failed to encode response: title contains U+0001, which XML cannot represent"
    );

    let json = link.render(ResponseFormat::Json).unwrap();
    assert!(json.contains(r#""title":"a\u0001b\rc""#));
}
