use leptos::prelude::*;

use super::Icon;
use crate::tree::FooterBlock;
use crate::types::Link;

#[component]
pub fn Footer(footer: FooterBlock) -> impl IntoView {
    let copyright = footer.copyright.text();

    view! {
        <footer id="contact" class="footer">
            <div class="footer-container">
                <div class="footer-column">
                    <h3>{footer.brand}</h3>
                    <p>{footer.blurb}</p>
                    <div class="social-icons">
                        {footer.socials.into_iter().map(|social| {
                            view! {
                                <a href=social.href aria-label=social.label>
                                    <Icon icon=social.icon />
                                </a>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                {footer.columns.into_iter().map(|column| {
                    view! {
                        <div class="footer-column">
                            <h3>{column.heading}</h3>
                            <ul>
                                {column.links.into_iter().map(|link| {
                                    view! { <li><FooterLink link=link /></li> }
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                }).collect::<Vec<_>>()}

                <div class="footer-column">
                    <h3>{footer.contact_heading}</h3>
                    <ul class="contact-info">
                        {footer.contact.into_iter().map(|detail| {
                            view! {
                                <li>
                                    <Icon icon=detail.icon class="contact-icon" />
                                    " "
                                    {detail.text}
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p class="footer-copyright">{copyright}</p>
                <div class="legal-links">
                    {footer.legal_links.into_iter().map(|link| {
                        view! { <FooterLink link=link /> }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterLink(link: Link) -> impl IntoView {
    view! { <a href=link.href>{link.label}</a> }
}
